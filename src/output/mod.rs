// src/output/mod.rs
//! Output rendering for symcrypt
//!
//! Turns a [`CryptoOutput`] into JSON or human-readable text and writes it
//! to the console or a file. The pipeline itself never prints.

pub use human::render_human;
pub use json::render_json;

mod human;
mod json;

use std::path::Path;

use crate::core::CryptoOutput;
use crate::enums::OutputFormat;
use crate::error::Result;

pub fn render(output: &CryptoOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rendered = render_json(output)?;
            tracing::info!("output serialized to JSON");
            Ok(rendered)
        }
        OutputFormat::Human => {
            tracing::info!("output serialized to human readable text");
            Ok(render_human(output))
        }
    }
}

/// Print to stdout, or write to `destination` when given
pub fn emit(rendered: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "output written to file");
        }
        None => {
            tracing::info!("printing output to console");
            println!("{}", rendered.trim_end());
        }
    }
    Ok(())
}
