// src/crypto/tdes_engine.rs
//! Triple-DES provider: EDE2 (128-bit) and EDE3 (192-bit) over an 8-byte block
//!
//! A Triple-DES key whose subkeys repeat collapses to single or double DES.
//! Such keys are rejected as `InvalidKeySize` instead of being accepted at
//! reduced strength. Parity bits are ignored when comparing subkeys.

use des::{TdesEde2, TdesEde3};

use super::{into_text, modes, rng, CipherParams, SymmetricProvider};
use crate::aliases::KeyBytes;
use crate::consts::{DES_SUBKEY_LEN, TDES_BLOCK_SIZE, TDES_KEY_SIZES};
use crate::enums::{Algorithm, CipherMode};
use crate::error::{CryptoError, Result};

static TDES_PARAMS: CipherParams = CipherParams {
    algorithm: Algorithm::TripleDes,
    block_size: TDES_BLOCK_SIZE,
    key_sizes: TDES_KEY_SIZES,
    key_sizes_desc: "128 or 192",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TripleDesEngine;

impl TripleDesEngine {
    /// Validate length and effective strength of a caller-supplied key
    fn require_strong_key<'k>(key: Option<&'k [u8]>) -> Result<&'k [u8]> {
        let key = TDES_PARAMS.require_key(key)?;
        if is_degenerate(key) {
            return Err(TDES_PARAMS.invalid_key_size(key.len() * 8));
        }
        Ok(key)
    }
}

impl SymmetricProvider for TripleDesEngine {
    fn params(&self) -> &'static CipherParams {
        &TDES_PARAMS
    }

    fn generate_key(&self, key_size_bits: usize) -> Result<KeyBytes> {
        TDES_PARAMS.check_key_size(key_size_bits)?;
        loop {
            let key = rng::random_bytes(key_size_bits / 8)?;
            if !is_degenerate(key.expose_secret()) {
                return Ok(key);
            }
        }
    }

    fn encrypt(
        &self,
        plaintext: &str,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<Vec<u8>> {
        if plaintext.is_empty() {
            return Err(CryptoError::EmptyInput);
        }
        let key = Self::require_strong_key(key)?;
        let iv = TDES_PARAMS.require_iv(iv, mode)?;
        tracing::trace!(bits = key.len() * 8, %mode, "TDES encryptor created");

        let input = plaintext.as_bytes();
        match key.len() {
            16 => modes::encrypt::<TdesEde2>(&TDES_PARAMS, key, iv, mode, input),
            24 => modes::encrypt::<TdesEde3>(&TDES_PARAMS, key, iv, mode, input),
            other => Err(TDES_PARAMS.invalid_key_size(other * 8)),
        }
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<String> {
        let key = Self::require_strong_key(key)?;
        let iv = TDES_PARAMS.require_iv(iv, mode)?;
        TDES_PARAMS.check_ciphertext(ciphertext)?;
        tracing::trace!(bits = key.len() * 8, %mode, "TDES decryptor created");

        let plaintext = match key.len() {
            16 => modes::decrypt::<TdesEde2>(&TDES_PARAMS, key, iv, mode, ciphertext)?,
            24 => modes::decrypt::<TdesEde3>(&TDES_PARAMS, key, iv, mode, ciphertext)?,
            other => return Err(TDES_PARAMS.invalid_key_size(other * 8)),
        };
        into_text(plaintext)
    }
}

fn same_subkey(a: &[u8], b: &[u8]) -> bool {
    a.iter().zip(b).all(|(x, y)| x & 0xFE == y & 0xFE)
}

/// True when repeated subkeys reduce the key to single or double DES
pub(crate) fn is_degenerate(key: &[u8]) -> bool {
    let subkeys: Vec<&[u8]> = key.chunks(DES_SUBKEY_LEN).collect();
    match subkeys.as_slice() {
        [k1, k2] => same_subkey(k1, k2),
        [k1, k2, k3] => same_subkey(k1, k2) || same_subkey(k2, k3) || same_subkey(k1, k3),
        _ => false,
    }
}
