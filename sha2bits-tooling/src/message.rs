use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Strips ASCII whitespace from both ends of `bytes`.
pub fn trim_message(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);

    &bytes[start..end]
}

/// Reads the whole message at `path` into memory, trimming surrounding
/// whitespace when `trim` is set.
pub fn load_message<P: AsRef<Path>>(path: P, trim: bool) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let raw = fs::read(path)
        .with_context(|| format!("failed to read message from {}", path.display()))?;

    let message = if trim {
        trim_message(&raw).to_vec()
    } else {
        raw
    };
    info!("loaded {} byte message from {}", message.len(), path.display());

    Ok(message)
}
