pub use anyhow::Result;

/// Errors surfaced by the digest engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message of {bytes} bytes exceeds the 64-bit length field")]
    MessageTooLong { bytes: usize },
    #[error("invalid hex digest: {}", _0)]
    InvalidHex(String),
    #[error("digest must be 32 bytes, got {}", _0)]
    InvalidDigestLength(usize),
}
