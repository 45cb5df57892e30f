// src/crypto/rng.rs
//! Secure randomness for keys and IVs
//!
//! Draws straight from the operating system CSPRNG. Sizes are runtime
//! values here (key sizes differ per preset), so the output is a
//! zeroizing `Dynamic` buffer rather than a fixed array.

use rand::{rngs::OsRng, TryRngCore};

use crate::aliases::SecretBuffer;
use crate::error::{CryptoError, Result};

/// `len` bytes from the OS random source
pub fn random_bytes(len: usize) -> Result<SecretBuffer> {
    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(SecretBuffer::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_requested_length() {
        assert_eq!(random_bytes(24).unwrap().expose_secret().len(), 24);
    }

    #[test]
    fn consecutive_draws_differ() {
        let a = random_bytes(16).unwrap();
        let b = random_bytes(16).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }
}
