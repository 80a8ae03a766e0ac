use crate::consts::{K32, STATE_LEN};
use crate::schedule::MessageSchedule;
use crate::words::Word;

#[inline]
pub fn big_sigma0(a: Word) -> Word {
    a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22)
}

#[inline]
pub fn big_sigma1(e: Word) -> Word {
    e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25)
}

/// Takes each bit from `f` where `e` is set and from `g` elsewhere.
#[inline]
pub fn choice(e: Word, f: Word, g: Word) -> Word {
    (e & f) ^ (!e & g)
}

/// Bitwise majority vote of the three inputs.
#[inline]
pub fn majority(a: Word, b: Word, c: Word) -> Word {
    (a & b) ^ (a & c) ^ (b & c)
}

/// One compression round over the working variables `a..h`.
#[inline]
fn round(v: &mut [Word; STATE_LEN], k: Word, w: Word) {
    let [a, b, c, d, e, f, g, h] = *v;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(choice(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = majority(a, b, c).wrapping_add(big_sigma0(a));

    *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
}

/// Runs the 64 rounds for one message schedule and folds the working variables
/// back into `state`.
pub fn compress(state: &mut [Word; STATE_LEN], schedule: &MessageSchedule) {
    let mut v = *state;

    for (k, w) in K32.iter().zip(schedule.iter()) {
        round(&mut v, *k, *w);
    }

    for (h, x) in state.iter_mut().zip(v.iter()) {
        *h = h.wrapping_add(*x);
    }
}
