// src/crypto/aes_engine.rs
//! AES provider: 128/192/256-bit keys over a 16-byte block

use aes::{Aes128, Aes192, Aes256};

use super::{into_text, modes, rng, CipherParams, SymmetricProvider};
use crate::aliases::KeyBytes;
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZES};
use crate::enums::{Algorithm, CipherMode};
use crate::error::{CryptoError, Result};

static AES_PARAMS: CipherParams = CipherParams {
    algorithm: Algorithm::Aes,
    block_size: AES_BLOCK_SIZE,
    key_sizes: AES_KEY_SIZES,
    key_sizes_desc: "128, 192 or 256",
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AesEngine;

impl SymmetricProvider for AesEngine {
    fn params(&self) -> &'static CipherParams {
        &AES_PARAMS
    }

    fn generate_key(&self, key_size_bits: usize) -> Result<KeyBytes> {
        AES_PARAMS.check_key_size(key_size_bits)?;
        rng::random_bytes(key_size_bits / 8)
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
        let key = AES_PARAMS.require_key(key)?;
        let iv = AES_PARAMS.require_iv(iv, mode)?;
        tracing::trace!(bits = key.len() * 8, %mode, "AES encryptor created");

        let input = plaintext.as_bytes();
        match key.len() {
            16 => modes::encrypt::<Aes128>(&AES_PARAMS, key, iv, mode, input),
            24 => modes::encrypt::<Aes192>(&AES_PARAMS, key, iv, mode, input),
            32 => modes::encrypt::<Aes256>(&AES_PARAMS, key, iv, mode, input),
            other => Err(AES_PARAMS.invalid_key_size(other * 8)),
        }
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<String> {
        let key = AES_PARAMS.require_key(key)?;
        let iv = AES_PARAMS.require_iv(iv, mode)?;
        AES_PARAMS.check_ciphertext(ciphertext)?;
        tracing::trace!(bits = key.len() * 8, %mode, "AES decryptor created");

        let plaintext = match key.len() {
            16 => modes::decrypt::<Aes128>(&AES_PARAMS, key, iv, mode, ciphertext)?,
            24 => modes::decrypt::<Aes192>(&AES_PARAMS, key, iv, mode, ciphertext)?,
            32 => modes::decrypt::<Aes256>(&AES_PARAMS, key, iv, mode, ciphertext)?,
            other => return Err(AES_PARAMS.invalid_key_size(other * 8)),
        };
        into_text(plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_block_plaintext_gains_a_padding_block() {
        let key: Vec<u8> = (0u8..16).collect();
        let ct = AesEngine
            .encrypt("0123456789abcdef", Some(key.as_slice()), None, CipherMode::Ecb)
            .unwrap();
        assert_eq!(ct.len(), 32);
    }

    #[test]
    fn key_length_picks_the_variant() {
        let iv = [7u8; AES_BLOCK_SIZE];
        for bytes in [16usize, 24, 32] {
            let key = vec![0x42u8; bytes];
            let ct = AesEngine
                .encrypt("variant", Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
                .unwrap();
            let pt = AesEngine
                .decrypt(&ct, Some(key.as_slice()), Some(iv.as_slice()), CipherMode::Cbc)
                .unwrap();
            assert_eq!(pt, "variant");
        }
    }
}
