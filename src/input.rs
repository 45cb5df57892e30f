// src/input.rs
//! Input-side helpers for loading request content from disk

use std::path::Path;

use crate::error::Result;

/// Read UTF-8 content from `path`, dropping one trailing line break
pub fn read_content_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut content = std::fs::read_to_string(path.as_ref())?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}
