// src/material.rs
//! Per-request key material
//!
//! A [`CryptoMaterial`] is built fresh for every request, checked against
//! the request's [`CipherSpec`], moved into exactly one transform and
//! zeroized when it drops. It is never cloned or shared.

use std::fmt;

use crate::aliases::{IvBytes, KeyBytes};
use crate::crypto::{is_degenerate, Engine, SymmetricProvider};
use crate::enums::{Algorithm, CipherMode, Field};
use crate::error::{CryptoError, Result};
use crate::preset::CipherSpec;

pub struct CryptoMaterial {
    key: KeyBytes,
    iv: Option<IvBytes>,
    mode: CipherMode,
}

impl CryptoMaterial {
    /// Bind key and IV to `spec`
    ///
    /// Key length must equal the spec's key size, and a Triple-DES key
    /// must not repeat a subkey. Under CBC the IV is required and must be
    /// one block long; under ECB any IV is dropped.
    pub fn new(spec: &CipherSpec, key: KeyBytes, iv: Option<IvBytes>) -> Result<Self> {
        let params = Engine::for_algorithm(spec.algorithm()).params();

        let key_len = key.expose_secret().len();
        if key_len == 0 {
            return Err(CryptoError::MissingKey);
        }
        if key_len != spec.key_len() {
            return Err(params.invalid_key_size(key_len * 8));
        }
        if spec.algorithm() == Algorithm::TripleDes && is_degenerate(key.expose_secret()) {
            return Err(params.invalid_key_size(key_len * 8));
        }

        let iv = match spec.mode() {
            CipherMode::Ecb => None,
            CipherMode::Cbc => {
                let iv = iv.ok_or(CryptoError::MissingRequiredField(Field::Iv))?;
                let iv_len = iv.expose_secret().len();
                if iv_len != params.block_size {
                    return Err(CryptoError::InvalidIvLength {
                        algorithm: spec.algorithm(),
                        expected: params.block_size,
                        actual: iv_len,
                    });
                }
                Some(iv)
            }
        };

        Ok(Self {
            key,
            iv,
            mode: spec.mode(),
        })
    }

    pub fn key(&self) -> &[u8] {
        self.key.expose_secret()
    }

    /// Always `None` under ECB
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_ref().map(|iv| iv.expose_secret().as_slice())
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }
}

impl fmt::Debug for CryptoMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoMaterial")
            .field("key", &format_args!("[REDACTED; {} bytes]", self.key().len()))
            .field("iv", &self.iv().map(|iv| iv.len()))
            .field("mode", &self.mode)
            .finish()
    }
}
