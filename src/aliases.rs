// src/aliases.rs
//! Secret byte containers built on secure-gate
//!
//! Key and IV lengths are only known at runtime (16/24/32-byte keys,
//! 8/16-byte IVs), so everything here is a dynamic alias that is
//! zeroized on drop. Access always goes through `.expose_secret()`.

pub use secure_gate::{dynamic_alias, Dynamic};

dynamic_alias!(KeyBytes, Vec<u8>); // AES-128/192/256, 2-key or 3-key TDES
dynamic_alias!(IvBytes, Vec<u8>); // one cipher block
dynamic_alias!(SecretBuffer, Vec<u8>); // decoded base64 and fresh random bytes
