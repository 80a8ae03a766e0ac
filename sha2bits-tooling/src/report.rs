use std::path::Path;

use anyhow::{ensure, Result};
use serde::Serialize;
use sha2bits::Digest;

use crate::settings::OutputFormat;

/// Everything printed about one hashed message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    path: String,
    message_bytes: usize,
    hex: String,
    bits: String,
}

impl Report {
    pub fn new<P: AsRef<Path>>(path: P, message: &[u8], digest: &Digest) -> Self {
        Report {
            path: path.as_ref().display().to_string(),
            message_bytes: message.len(),
            hex: digest.to_hex(),
            bits: digest.to_bits(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let out = match format {
            OutputFormat::Hex => self.hex.clone(),
            OutputFormat::Bits => self.bits.clone(),
            OutputFormat::All => format!("{}\n{}", self.hex, self.bits),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(out)
    }
}

/// Checks `digest` against an expected hex digest.
pub fn verify(digest: &Digest, expected: &str) -> Result<()> {
    let expected = Digest::from_hex(expected)?;
    ensure!(
        &expected == digest,
        "digest mismatch: expected {}, got {}",
        expected,
        digest
    );
    Ok(())
}
