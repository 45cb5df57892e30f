// src/crypto/mod.rs
//! Symmetric provider capability and algorithm dispatch
//!
//! Every provider works on in-memory buffers only. The cipher context
//! (key schedule + chaining state) is built inside a single `encrypt` or
//! `decrypt` call, consumed by the transform and zeroized when it drops,
//! so nothing keyed outlives the call.

mod aes_engine;
mod modes;
pub mod rng;
mod tdes_engine;

pub use aes_engine::AesEngine;
pub use tdes_engine::TripleDesEngine;
pub(crate) use tdes_engine::is_degenerate;

use zeroize::Zeroize;

use crate::aliases::{IvBytes, KeyBytes};
use crate::enums::{Algorithm, CipherMode, Field};
use crate::error::{CryptoError, Result};

/// Static parameters describing one block cipher family
#[derive(Debug)]
pub struct CipherParams {
    pub algorithm: Algorithm,
    pub block_size: usize,
    pub key_sizes: &'static [usize],
    pub key_sizes_desc: &'static str,
}

impl CipherParams {
    pub fn invalid_key_size(&self, bits: usize) -> CryptoError {
        CryptoError::InvalidKeySize {
            algorithm: self.algorithm,
            bits,
            valid: self.key_sizes_desc,
        }
    }

    /// Reject key sizes outside the algorithm's valid set
    pub fn check_key_size(&self, bits: usize) -> Result<()> {
        if self.key_sizes.contains(&bits) {
            Ok(())
        } else {
            Err(self.invalid_key_size(bits))
        }
    }

    /// An absent or empty key is `MissingKey`; a present one must have a valid length
    pub fn require_key<'k>(&self, key: Option<&'k [u8]>) -> Result<&'k [u8]> {
        let key = key.filter(|k| !k.is_empty()).ok_or(CryptoError::MissingKey)?;
        self.check_key_size(key.len() * 8)?;
        Ok(key)
    }

    /// CBC needs a block-sized IV; ECB never looks at one
    pub fn require_iv<'i>(&self, iv: Option<&'i [u8]>, mode: CipherMode) -> Result<Option<&'i [u8]>> {
        if !mode.uses_iv() {
            return Ok(None);
        }
        let iv = iv.ok_or(CryptoError::MissingRequiredField(Field::Iv))?;
        if iv.len() != self.block_size {
            return Err(CryptoError::InvalidIvLength {
                algorithm: self.algorithm,
                expected: self.block_size,
                actual: iv.len(),
            });
        }
        Ok(Some(iv))
    }

    /// Ciphertext must be a non-empty whole number of blocks
    pub fn check_ciphertext(&self, ciphertext: &[u8]) -> Result<()> {
        if ciphertext.is_empty() {
            return Err(CryptoError::InvalidCiphertext("ciphertext is empty".into()));
        }
        if ciphertext.len() % self.block_size != 0 {
            return Err(CryptoError::InvalidCiphertext(format!(
                "length {} is not a multiple of the {}-byte block size",
                ciphertext.len(),
                self.block_size
            )));
        }
        Ok(())
    }
}

/// Capability shared by every block cipher engine
pub trait SymmetricProvider {
    fn params(&self) -> &'static CipherParams;

    fn algorithm(&self) -> Algorithm {
        self.params().algorithm
    }

    /// Block size in bytes, also the CBC IV length
    fn block_size(&self) -> usize {
        self.params().block_size
    }

    fn valid_key_sizes(&self) -> &'static [usize] {
        self.params().key_sizes
    }

    /// Fresh random key of `key_size_bits`, validated before any bytes are drawn
    fn generate_key(&self, key_size_bits: usize) -> Result<KeyBytes>;

    /// Fresh random block-sized IV from the OS CSPRNG
    fn generate_iv(&self) -> Result<IvBytes> {
        rng::random_bytes(self.block_size())
    }

    /// Encrypt UTF-8 text with PKCS#7 padding. `iv` is ignored under ECB.
    fn encrypt(
        &self,
        plaintext: &str,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<Vec<u8>>;

    /// Decrypt and unpad, returning the UTF-8 plaintext. `iv` is ignored under ECB.
    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<String>;
}

/// Tagged provider selected from a spec's algorithm
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    Aes(AesEngine),
    TripleDes(TripleDesEngine),
}

impl Engine {
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Aes => Engine::Aes(AesEngine),
            Algorithm::TripleDes => Engine::TripleDes(TripleDesEngine),
        }
    }

    /// Dispatch on a textual algorithm name; anything but aes/tdes is `UnsupportedAlgorithm`
    pub fn by_name(name: &str) -> Result<Self> {
        Ok(Self::for_algorithm(name.parse()?))
    }

    fn provider(&self) -> &dyn SymmetricProvider {
        match self {
            Engine::Aes(engine) => engine,
            Engine::TripleDes(engine) => engine,
        }
    }
}

impl SymmetricProvider for Engine {
    fn params(&self) -> &'static CipherParams {
        self.provider().params()
    }

    fn generate_key(&self, key_size_bits: usize) -> Result<KeyBytes> {
        self.provider().generate_key(key_size_bits)
    }

    fn generate_iv(&self) -> Result<IvBytes> {
        self.provider().generate_iv()
    }

    fn encrypt(
        &self,
        plaintext: &str,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<Vec<u8>> {
        self.provider().encrypt(plaintext, key, iv, mode)
    }

    fn decrypt(
        &self,
        ciphertext: &[u8],
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
        mode: CipherMode,
    ) -> Result<String> {
        self.provider().decrypt(ciphertext, key, iv, mode)
    }
}

/// Decrypted bytes must be UTF-8 text; anything else means wrong key/iv/mode
pub(crate) fn into_text(plaintext: Vec<u8>) -> Result<String> {
    String::from_utf8(plaintext).map_err(|err| {
        err.into_bytes().zeroize();
        CryptoError::InvalidCiphertext("decrypted payload is not valid UTF-8".into())
    })
}
