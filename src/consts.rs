// src/consts.rs
//! Shared constants: cipher parameters and defaults

/// AES block size in bytes (also the CBC IV length)
pub const AES_BLOCK_SIZE: usize = 16;

/// Triple-DES block size in bytes (also the CBC IV length)
pub const TDES_BLOCK_SIZE: usize = 8;

/// Valid AES key sizes in bits
pub const AES_KEY_SIZES: &[usize] = &[128, 192, 256];

/// Valid Triple-DES key sizes in bits (two-key and three-key EDE)
pub const TDES_KEY_SIZES: &[usize] = &[128, 192];

/// Length of a single DES subkey inside a Triple-DES key
pub const DES_SUBKEY_LEN: usize = 8;

/// Env var pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "SYMCRYPT_CONFIG";

/// Env var overriding the configured log filter
pub const LOG_ENV_VAR: &str = "SYMCRYPT_LOG";

/// Config file looked up under the platform config dir
pub const CONFIG_DIR_NAME: &str = "symcrypt";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Label attached to base64 encoded encryption output
pub const PAYLOAD_ENCODING: &str = "base64";
