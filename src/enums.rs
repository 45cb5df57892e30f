// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the small closed sets that flow through the
//! pipeline: algorithms, chaining modes, operations, prompt fields and
//! output formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Supported block ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Aes,
    #[serde(rename = "tdes")]
    TripleDes,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Aes => "aes",
            Algorithm::TripleDes => "tdes",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes" => Ok(Algorithm::Aes),
            "tdes" | "3des" | "tripledes" => Ok(Algorithm::TripleDes),
            other => Err(CryptoError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    Cbc,
    Ecb,
}

impl CipherMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CipherMode::Cbc => "cbc",
            CipherMode::Ecb => "ecb",
        }
    }

    /// CBC chains blocks off an IV; ECB takes none.
    pub fn uses_iv(self) -> bool {
        matches!(self, CipherMode::Cbc)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Request fields that may be collected through the secret prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Content,
    Key,
    Iv,
}

impl Field {
    /// Text shown to the user when the field has to be asked for
    pub fn hint(self) -> &'static str {
        match self {
            Field::Content => "Enter encrypted content",
            Field::Key => "Enter encryption key",
            Field::Iv => "Enter initialization vector",
        }
    }

    /// Whether typed input should be hidden when prompting
    pub fn is_secret(self) -> bool {
        !matches!(self, Field::Content)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Content => f.write_str("content"),
            Field::Key => f.write_str("key"),
            Field::Iv => f.write_str("iv"),
        }
    }
}

/// Rendering of a [`CryptoOutput`](crate::core::CryptoOutput)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(CryptoError::Config(format!("unknown output format '{other}'"))),
        }
    }
}
