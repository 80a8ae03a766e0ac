use log::debug;

use crate::digest::Digest;
use crate::error::Result;
use crate::padding::pad;
use crate::state::DigestState;
use crate::words::{pack_words, split_chunks};

/// Computes the SHA-256 digest of `message`.
///
/// All working state is local to the call. The only failure is a message whose
/// length in bits does not fit in the 64-bit length field.
pub fn sum(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;
    let words = pack_words(&padded);
    let chunks = split_chunks(&words);

    debug!(
        "hashing {} bytes as {} padded bits in {} chunks",
        message.len(),
        padded.len(),
        chunks.len()
    );

    let mut state = DigestState::new();
    for chunk in chunks.iter() {
        state.compress_chunk(chunk);
    }

    Ok(state.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_xorshift::XorShiftRng;
    use sha2::{Digest as _, Sha256 as Reference};

    use crate::consts::H256;
    use crate::words::Chunk;
    use crate::TEST_SEED;

    fn sum_hex(message: &[u8]) -> String {
        sum(message).expect("sum failed").to_hex()
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            sum_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_abc() {
        let digest = sum(b"abc").expect("sum failed");
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(digest.to_bits().starts_with("1011101001111000"));
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            sum_hex(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
        assert_eq!(
            sum_hex(b"The quick brown fox jumps over the lazy dog"),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn test_million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(
            sum_hex(&message),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn test_matching_reference_around_boundaries() {
        let rng = &mut XorShiftRng::from_seed(TEST_SEED);

        for len in 0..=200 {
            let mut input = vec![0u8; len];
            rng.fill_bytes(&mut input);
            assert_eq!(
                &sum(&input).expect("sum failed").as_bytes()[..],
                &Reference::digest(&input)[..],
                "len {}",
                len
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_isolated() {
        let first = sum(b"first message").expect("sum failed");
        let other = sum(&[0xff; 300]).expect("sum failed");
        let again = sum(b"first message").expect("sum failed");

        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn test_concurrent_sums() {
        let inputs: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 64 * i as usize + 3]).collect();
        let expected: Vec<Digest> = inputs
            .iter()
            .map(|m| sum(m).expect("sum failed"))
            .collect();

        let handles: Vec<_> = inputs
            .into_iter()
            .map(|m| std::thread::spawn(move || sum(&m).expect("sum failed")))
            .collect();

        for (handle, expected) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    }

    #[test]
    fn test_chunk_by_chunk_accumulation() {
        let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
        let words = pack_words(&pad(message).expect("pad failed"));
        let chunks: Vec<Chunk> = split_chunks(&words);
        assert_eq!(chunks.len(), 2);

        // The first chunk alone starts from the initialization vector.
        let mut single = DigestState::new();
        single.compress_chunk(&chunks[0]);
        assert_ne!(single.words(), &H256);

        // Continuing from the folded state yields the full digest.
        let mut state = single.clone();
        state.compress_chunk(&chunks[1]);
        assert_eq!(state.chunks(), 2);
        assert_eq!(state.finish(), sum(message).expect("sum failed"));

        // Reordering chunks changes the result.
        let mut swapped = DigestState::new();
        swapped.compress_chunk(&chunks[1]);
        swapped.compress_chunk(&chunks[0]);
        assert_ne!(swapped.finish(), sum(message).expect("sum failed"));
    }

    proptest! {
        #[test]
        fn prop_matches_reference(input in proptest::collection::vec(any::<u8>(), 0..600)) {
            let digest = sum(&input).expect("sum failed");
            prop_assert_eq!(&digest.as_bytes()[..], &Reference::digest(&input)[..]);
            prop_assert_eq!(digest, sum(&input).expect("sum failed"));
        }
    }
}
