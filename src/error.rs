// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::{Algorithm, Field};

pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid {algorithm} key size: {bits} bits (valid: {valid})")]
    InvalidKeySize {
        algorithm: Algorithm,
        bits: usize,
        valid: &'static str,
    },

    #[error("invalid {algorithm} IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    #[error("{field} is not valid base64: {reason}")]
    InvalidEncoding { field: Field, reason: String },

    #[error("{0} is required but was left blank")]
    MissingRequiredField(Field),

    #[error("the key must be set")]
    MissingKey,

    #[error("content to encrypt can't be empty")]
    EmptyInput,

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("cryptographic transform failed under {spec}")]
    TransformFailure {
        spec: String,
        #[source]
        source: Box<CryptoError>,
    },

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("secure random source failed: {0}")]
    RandomSource(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CryptoError {
    fn from(err: toml::de::Error) -> Self {
        CryptoError::Config(err.to_string())
    }
}
