// src/key_ops.rs
//! Base64 encoding discipline for keys, IVs and payloads
//!
//! Everything that crosses the text boundary (caller-supplied key/iv,
//! ciphertext, output fields) is standard padded base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::SecretBuffer;
use crate::enums::Field;
use crate::error::{CryptoError, Result};

/// Decode a base64 field into a zeroizing buffer
///
/// Surrounding whitespace is ignored so values pasted from files or
/// terminals decode cleanly.
pub fn decode_field(field: Field, text: &str) -> Result<SecretBuffer> {
    STANDARD
        .decode(text.trim())
        .map(SecretBuffer::new)
        .map_err(|e| CryptoError::InvalidEncoding {
            field,
            reason: e.to_string(),
        })
}

#[inline]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// `Some(trimmed)` unless the value is absent or whitespace only
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
