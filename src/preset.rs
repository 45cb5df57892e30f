// src/preset.rs
//! Closed catalog of cipher presets
//!
//! A [`CipherSpec`] can only be obtained from this catalog, which is what
//! guarantees its key size is valid for its algorithm.

use std::fmt;
use std::str::FromStr;

use crate::enums::{Algorithm, CipherMode};
use crate::error::{CryptoError, Result};

/// Immutable {algorithm, key size, mode} triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSpec {
    algorithm: Algorithm,
    key_size_bits: usize,
    mode: CipherMode,
}

impl CipherSpec {
    const fn preset(algorithm: Algorithm, key_size_bits: usize, mode: CipherMode) -> Self {
        Self {
            algorithm,
            key_size_bits,
            mode,
        }
    }

    /// Look up a preset by its id, e.g. `"aes-256-cbc"`
    pub fn from_preset(id: &str) -> Result<Self> {
        let wanted = id.trim().to_ascii_lowercase();
        PRESETS
            .iter()
            .find(|spec| spec.label() == wanted)
            .copied()
            .ok_or_else(|| CryptoError::UnknownPreset(id.to_owned()))
    }

    /// Every preset in catalog order
    pub fn presets() -> &'static [CipherSpec] {
        PRESETS
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn key_size_bits(&self) -> usize {
        self.key_size_bits
    }

    pub fn key_len(&self) -> usize {
        self.key_size_bits / 8
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Canonical lowercase `{algorithm}-{keySize}-{mode}` label
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CipherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.algorithm, self.key_size_bits, self.mode)
    }
}

impl FromStr for CipherSpec {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        CipherSpec::from_preset(s)
    }
}

static PRESETS: &[CipherSpec] = &[
    CipherSpec::preset(Algorithm::Aes, 128, CipherMode::Cbc),
    CipherSpec::preset(Algorithm::Aes, 192, CipherMode::Cbc),
    CipherSpec::preset(Algorithm::Aes, 256, CipherMode::Cbc),
    CipherSpec::preset(Algorithm::Aes, 128, CipherMode::Ecb),
    CipherSpec::preset(Algorithm::Aes, 192, CipherMode::Ecb),
    CipherSpec::preset(Algorithm::Aes, 256, CipherMode::Ecb),
    CipherSpec::preset(Algorithm::TripleDes, 128, CipherMode::Cbc),
    CipherSpec::preset(Algorithm::TripleDes, 192, CipherMode::Cbc),
    CipherSpec::preset(Algorithm::TripleDes, 128, CipherMode::Ecb),
    CipherSpec::preset(Algorithm::TripleDes, 192, CipherMode::Ecb),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<String> = PRESETS.iter().map(CipherSpec::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), PRESETS.len());
    }
}
