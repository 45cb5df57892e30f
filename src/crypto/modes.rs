// src/crypto/modes.rs
//! CBC / ECB transforms generic over the underlying block cipher
//!
//! Callers validate key and IV lengths first; the length errors mapped
//! here only fire if that contract is broken.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use super::CipherParams;
use crate::enums::{CipherMode, Field};
use crate::error::{CryptoError, Result};

pub(crate) fn encrypt<C>(
    params: &CipherParams,
    key: &[u8],
    iv: Option<&[u8]>,
    mode: CipherMode,
    plaintext: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    match mode {
        CipherMode::Cbc => {
            let iv = iv.ok_or(CryptoError::MissingRequiredField(Field::Iv))?;
            let ctx = cbc::Encryptor::<C>::new_from_slices(key, iv)
                .map_err(|_| rejected(params, key, Some(iv)))?;
            Ok(ctx.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        CipherMode::Ecb => {
            let ctx = ecb::Encryptor::<C>::new_from_slice(key)
                .map_err(|_| rejected(params, key, None))?;
            Ok(ctx.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
    }
}

pub(crate) fn decrypt<C>(
    params: &CipherParams,
    key: &[u8],
    iv: Option<&[u8]>,
    mode: CipherMode,
    ciphertext: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let plaintext = match mode {
        CipherMode::Cbc => {
            let iv = iv.ok_or(CryptoError::MissingRequiredField(Field::Iv))?;
            let ctx = cbc::Decryptor::<C>::new_from_slices(key, iv)
                .map_err(|_| rejected(params, key, Some(iv)))?;
            ctx.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        }
        CipherMode::Ecb => {
            let ctx = ecb::Decryptor::<C>::new_from_slice(key)
                .map_err(|_| rejected(params, key, None))?;
            ctx.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        }
    };
    plaintext.map_err(|_| {
        CryptoError::InvalidCiphertext("padding is invalid (wrong key, iv or mode?)".into())
    })
}

fn rejected(params: &CipherParams, key: &[u8], iv: Option<&[u8]>) -> CryptoError {
    match iv {
        Some(iv) if iv.len() != params.block_size => CryptoError::InvalidIvLength {
            algorithm: params.algorithm,
            expected: params.block_size,
            actual: iv.len(),
        },
        _ => params.invalid_key_size(key.len() * 8),
    }
}
