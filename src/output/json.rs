// src/output/json.rs
use crate::core::CryptoOutput;
use crate::error::Result;

/// Pretty JSON with absent fields omitted
pub fn render_json(output: &CryptoOutput) -> Result<String> {
    Ok(serde_json::to_string_pretty(output)?)
}
