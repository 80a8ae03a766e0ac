use byteorder::{BigEndian, ByteOrder};
use log::trace;

use crate::compress::compress;
use crate::consts::{H256, STATE_LEN};
use crate::digest::{Digest, DIGEST_LEN};
use crate::schedule::schedule;
use crate::words::{Chunk, Word};

/// The `H0..H7` accumulators of a single digest computation.
///
/// Every computation starts from its own copy of the initialization vector;
/// [`DigestState::finish`] consumes the state, so it cannot be fed again once
/// the digest has been read.
#[derive(Clone)]
pub struct DigestState {
    state: [Word; STATE_LEN],
    chunks: u64,
}

impl Default for DigestState {
    fn default() -> Self {
        DigestState {
            state: H256,
            chunks: 0,
        }
    }
}

impl DigestState {
    pub fn new() -> Self {
        DigestState::default()
    }

    /// Schedules and compresses `chunk`, folding the result into the accumulators.
    /// Chunks must be fed in message order.
    pub fn compress_chunk(&mut self, chunk: &Chunk) {
        let w = schedule(chunk);
        compress(&mut self.state, &w);
        self.chunks += 1;

        trace!("folded chunk {}", self.chunks);
    }

    pub fn words(&self) -> &[Word; STATE_LEN] {
        &self.state
    }

    /// Number of chunks folded so far.
    pub fn chunks(&self) -> u64 {
        self.chunks
    }

    pub fn finish(self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        BigEndian::write_u32_into(&self.state, &mut out);
        Digest::from(out)
    }
}

opaque_debug::implement!(DigestState);
