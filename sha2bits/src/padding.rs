use bitvec::prelude::*;
use std::convert::TryFrom;

use crate::bits::{to_bits, BitSequence};
use crate::consts::{CHUNK_BITS, LENGTH_BITS};
use crate::error::{Error, Result};

/// Length of a `len`-byte message in bits, as written into the length field.
///
/// Fails with [`Error::MessageTooLong`] when the bit length does not fit in 64 bits.
pub fn message_bit_len(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or_else(|| Error::MessageTooLong { bytes: len }.into())
}

/// Length in bits of the padded form of a `len`-byte message.
pub fn padded_len(len: usize) -> Result<usize> {
    let bit_len = message_bit_len(len)? as u128;
    let chunk_bits = CHUNK_BITS as u128;
    // Message, the single 1 bit and the length field, rounded up to whole chunks.
    let chunks = (bit_len + 1 + LENGTH_BITS as u128 + chunk_bits - 1) / chunk_bits;

    usize::try_from(chunks * chunk_bits).map_err(|_| Error::MessageTooLong { bytes: len }.into())
}

/// Pads `message` to a whole number of 512-bit chunks.
///
/// The message bits are followed by a single `1` bit, the fewest `0` bits that
/// leave exactly 64 bits before the next chunk boundary, and the message length
/// in bits as a big-endian `u64`. The result is never shorter than one chunk, and
/// a message that fills the space before the length field gets a whole extra chunk.
pub fn pad(message: &[u8]) -> Result<BitSequence> {
    let bit_len = message_bit_len(message.len())?;
    let total = padded_len(message.len())?;

    let mut bits = to_bits(message);
    bits.reserve(total - bits.len());
    bits.push(true);

    let zeros = total - bits.len() - LENGTH_BITS;
    bits.resize(bits.len() + zeros, false);
    bits.extend_from_bitslice(bit_len.to_be_bytes().view_bits::<Msb0>());

    assert_eq!(bits.len(), total, "padded length mismatch");
    assert_eq!(bits.len() % CHUNK_BITS, 0, "padding is not chunk aligned");

    Ok(bits)
}
