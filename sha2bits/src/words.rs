use bitvec::prelude::*;

use crate::consts::{BLOCK_LEN, WORD_BITS};

/// 32-bit word; all arithmetic on words wraps modulo 2^32.
pub type Word = u32;

/// Sixteen words, the unit of compression.
pub type Chunk = [Word; BLOCK_LEN];

/// Packs `bits` into big-endian 32-bit words, in order.
///
/// Panics if the length of `bits` is not a multiple of 32.
pub fn pack_words(bits: &BitSlice<u8, Msb0>) -> Vec<Word> {
    assert_eq!(bits.len() % WORD_BITS, 0, "bit sequence is not word aligned");

    bits.chunks_exact(WORD_BITS)
        .map(|word| {
            word.iter()
                .by_vals()
                .fold(0, |acc: Word, bit| (acc << 1) | Word::from(bit))
        })
        .collect()
}

/// Partitions `words` into consecutive chunks.
///
/// Panics if the number of words is not a multiple of 16.
pub fn split_chunks(words: &[Word]) -> Vec<Chunk> {
    assert_eq!(words.len() % BLOCK_LEN, 0, "word sequence is not chunk aligned");

    words
        .chunks_exact(BLOCK_LEN)
        .map(|words| {
            let mut chunk = [0; BLOCK_LEN];
            chunk.copy_from_slice(words);
            chunk
        })
        .collect()
}
