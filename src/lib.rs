// src/lib.rs
//! symcrypt: AES / Triple-DES request pipeline
//!
//! Features:
//! - Ten fixed presets: aes-{128,192,256}-{cbc,ecb}, tdes-{128,192}-{cbc,ecb}
//! - Key and IV generation from the OS CSPRNG, or caller-supplied base64
//! - Interactive prompting for missing decryption inputs through a port
//! - Zeroizing key material scoped to a single transform

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod crypto;
pub mod enums;
pub mod input;
pub mod key_ops;
pub mod material;
pub mod observe;
pub mod output;
pub mod preset;
pub mod prompt;

pub mod error;

// Re-export everything users need at the crate root
pub use crate::core::{CryptoOutput, CryptoRequest, RequestProcessor};
pub use config::load as load_config;
pub use crypto::{AesEngine, Engine, SymmetricProvider, TripleDesEngine};
pub use enums::{Algorithm, CipherMode, Field, Operation, OutputFormat};
pub use error::{CryptoError, Result};
pub use material::CryptoMaterial;
pub use observe::{NoopObserver, Observer, PipelineEvent, RecordingObserver, TracingObserver};
pub use preset::CipherSpec;
pub use prompt::{ConsolePrompt, ScriptedPrompt, SecretPrompt};
