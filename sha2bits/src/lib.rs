//! A bit-level implementation of the [SHA-256][1] message digest.
//!
//! The message is padded into a packed bit sequence, packed into 32-bit words,
//! split into 512-bit chunks, and each chunk is scheduled and compressed into a
//! per-call [`DigestState`].
//!
//! [1]: https://csrc.nist.gov/publications/detail/fips/180/4/final

#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![allow(clippy::unreadable_literal)]

pub mod bits;
pub mod compress;
pub mod consts;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;
mod sha256;
pub mod state;
pub mod words;

pub use digest::Digest;
pub use error::{Error, Result};
pub use sha256::sum;
pub use state::DigestState;

#[cfg(test)]
pub(crate) const TEST_SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];
