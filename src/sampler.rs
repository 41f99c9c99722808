//! Uniform bounded integers drawn from a `Pcg64`.
//!
//! Two algorithms are provided because the reference ecosystem uses both:
//! masked rejection (`random_interval`, used by shuffling) and Lemire's
//! multiply-shift rejection (`bounded`, used for integer ranges).  They
//! consume different numbers of generator outputs for the same bound,
//! so callers that need stream lockstep must pick the matching one.

use crate::pcg64::Pcg64;
use crate::status::{Result, Status};

static MAX32: u64 = 0xffff_ffff;

/// Smallest value of the form 2^k - 1 that is >= `max`.
#[inline]
fn mask_for(max: u64) -> u64 {
    let mut mask = max;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    mask |= mask >> 32;
    mask
}

/// Returns a uniformly distributed value in the range [0..max].
///
/// The width of each draw is chosen by `max`, not by the value drawn:
/// 32-bit draws while `max` fits in 32 bits, 64-bit draws above that.
/// `max == 0` consumes nothing.
#[must_use]
pub fn random_interval(mut state: Pcg64, max: u64) -> (u64, Pcg64) {
    if max == 0 {
        return (0, state);
    }
    let mask = mask_for(max);
    if max <= MAX32 {
        loop {
            let (v, next) = state.next32();
            state = next;
            let value = v as u64 & mask;
            if value <= max {
                return (value, state);
            }
        }
    } else {
        loop {
            let (v, next) = state.next();
            state = next;
            let value = v & mask;
            if value <= max {
                return (value, state);
            }
        }
    }
}

fn lemire32(mut state: Pcg64, range: u32) -> (u32, Pcg64) {
    let range_excl = range + 1;
    let (v, next) = state.next32();
    state = next;
    let mut m = v as u64 * range_excl as u64;
    let mut leftover = m as u32;
    if leftover < range_excl {
        let threshold = (u32::MAX - range) % range_excl;
        while leftover < threshold {
            let (v, next) = state.next32();
            state = next;
            m = v as u64 * range_excl as u64;
            leftover = m as u32;
        }
    }
    ((m >> 32) as u32, state)
}

fn lemire64(mut state: Pcg64, range: u64) -> (u64, Pcg64) {
    let range_excl = range + 1;
    let (v, next) = state.next();
    state = next;
    let mut m = v as u128 * range_excl as u128;
    let mut leftover = m as u64;
    if leftover < range_excl {
        let threshold = (u64::MAX - range) % range_excl;
        while leftover < threshold {
            let (v, next) = state.next();
            state = next;
            m = v as u128 * range_excl as u128;
            leftover = m as u64;
        }
    }
    ((m >> 64) as u64, state)
}

/// Returns `offset + r` with `r` uniform in [0..range].
///
/// Full-width ranges take a single raw output; everything else goes
/// through Lemire rejection at 32 or 64 bits depending on `range`.
#[must_use]
pub fn bounded(state: Pcg64, offset: u64, range: u64) -> (u64, Pcg64) {
    if range == 0 {
        return (offset, state);
    }
    let (r, state) = if range == MAX32 {
        let (v, s) = state.next32();
        (v as u64, s)
    } else if range < MAX32 {
        let (v, s) = lemire32(state, range as u32);
        (v as u64, s)
    } else if range == u64::MAX {
        state.next()
    } else {
        lemire64(state, range)
    };
    (offset.wrapping_add(r), state)
}

/// Returns a uniformly distributed value in the range [low..high).
/// REQUIRES: low < high, otherwise InvalidArgument.
pub fn integers(state: Pcg64, low: i64, high: i64) -> Result<(i64, Pcg64)> {
    if low >= high {
        return Err(Status::invalid_argument(
            "low must be less than high", &format!("low={} high={}", low, high)));
    }
    let range = (high as u64).wrapping_sub(low as u64).wrapping_sub(1);
    let (v, state) = bounded(state, low as u64, range);
    Ok((v as i64, state))
}
