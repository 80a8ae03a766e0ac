use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};
use crate::words::{Chunk, Word};

/// Sixty-four words derived from one chunk.
pub type MessageSchedule = [Word; SCHEDULE_LEN];

#[inline]
pub fn small_sigma0(x: Word) -> Word {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
pub fn small_sigma1(x: Word) -> Word {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands `chunk` into its message schedule.
///
/// Words 0..16 are the chunk itself; each later word depends only on earlier
/// ones, so the schedule is filled strictly in ascending index order.
pub fn schedule(chunk: &Chunk) -> MessageSchedule {
    let mut w = [0; SCHEDULE_LEN];
    w[..BLOCK_LEN].copy_from_slice(chunk);

    for i in 0..SCHEDULE_LEN - BLOCK_LEN {
        w[i + 16] = w[i]
            .wrapping_add(small_sigma0(w[i + 1]))
            .wrapping_add(w[i + 9])
            .wrapping_add(small_sigma1(w[i + 14]));
    }

    w
}
