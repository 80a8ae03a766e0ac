//! Conversion between bytes and packed bit sequences.
//!
//! Bits are ordered most-significant first within each byte, and bytes keep
//! their input order, so bit `8 * i` is the high bit of byte `i`.

use bitvec::prelude::*;

/// Byte-backed bit vector, most-significant bit first.
pub type BitSequence = BitVec<u8, Msb0>;

/// Positional weights of the bits of a byte, high bit first.
const BYTE_WEIGHTS: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Expands `bytes` into exactly `8 * bytes.len()` bits.
pub fn to_bits(bytes: &[u8]) -> BitSequence {
    BitSequence::from_slice(bytes)
}

/// Reassembles bytes from `bits`, eight bits per byte.
///
/// Panics if the length of `bits` is not a multiple of 8.
pub fn from_bits(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    assert_eq!(bits.len() % 8, 0, "bit sequence is not byte aligned");

    bits.chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .by_vals()
                .zip(BYTE_WEIGHTS.iter())
                .filter(|(bit, _)| *bit)
                .fold(0u8, |acc, (_, weight)| acc | weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_to_bits_msb_first() {
        let bits = to_bits(&[0x80, 0x01]);
        assert_eq!(bits.len(), 16);
        assert!(bits[0]);
        assert!(bits[1..15].not_any());
        assert!(bits[15]);
    }

    #[test]
    fn test_to_bits_abc() {
        let rendered: String = to_bits(b"abc")
            .iter()
            .by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect();
        assert_eq!(rendered, "011000010110001001100011");
    }

    #[test]
    fn test_empty() {
        assert!(to_bits(&[]).is_empty());
        assert!(from_bits(BitSlice::empty()).is_empty());
    }

    #[test]
    fn test_from_bits_weights() {
        let mut bits = BitSequence::new();
        for b in [true, false, true, false, false, false, false, true] {
            bits.push(b);
        }
        assert_eq!(from_bits(&bits), vec![0b1010_0001]);
    }

    #[test]
    #[should_panic(expected = "not byte aligned")]
    fn test_from_bits_unaligned() {
        let bits = bitvec![u8, Msb0; 1; 7];
        from_bits(&bits);
    }

    proptest! {
        #[test]
        fn prop_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let bits = to_bits(&bytes);
            prop_assert_eq!(bits.len(), bytes.len() * 8);
            prop_assert_eq!(from_bits(&bits), bytes);
        }
    }
}
