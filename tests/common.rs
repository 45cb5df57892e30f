// tests/common.rs
//! Shared test utilities: logging setup and known aes-256-cbc vectors
#![allow(dead_code)]

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok();
}

pub const HELLO_CIPHERTEXT: &str = "uI+LEV/tOOSGPHLYist7GNpQ1RSXLrUtXYo3N9PnEdE=";
pub const HELLO_KEY: &str = "dHXCGIJnhpAoUlXlUFvUSw1x2/xFe+055H2wG153qPE=";
pub const HELLO_IV: &str = "sE2s2dAUJLuvHE2dzlONjw==";
pub const HELLO_PLAINTEXT: &str = "Hello word! My name is Jacob.";

pub const GUID_CIPHERTEXT: &str =
    "Vq1W5PkJzLq36QxictNU/chbTDs3mTK1A5Z6n1FUpYEZjXmEAQUnPL/+52VML+sf";
pub const GUID_KEY: &str = "KKmBeaqfp9SQCpiHl3wd4zHcysTHo+8NqivZJZqG600=";
pub const GUID_IV: &str = "dQrXyGIYwEEP2hCjbDzrww==";
pub const GUID_PLAINTEXT: &str = "82ead9a4-0358-4246-a524-79743f337691";

/// Encrypting this under GUID_KEY / GUID_IV gives UNIT_TEST_CIPHERTEXT
pub const UNIT_TEST_PLAINTEXT: &str = "Hello from unit test!";
pub const UNIT_TEST_CIPHERTEXT: &str = "fEYga6aCnnMoiAhqzc490RPGpJQTStOqAH4tRe4kIgI=";
