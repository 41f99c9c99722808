//! 128-bit permuted congruential generator with XSL-RR output.
//!
//! A `Pcg64` is a plain value.  Every operation consumes one state and
//! returns the next, so two holders of the same value always observe the
//! same stream and no generator is ever shared mutably.

use log::{debug, trace};

use crate::seed::{Entropy, SeedSequence};
use crate::status::{Result, Status};
use crate::util::uint128::U128;

/// 2549297995355413924 * 2^64 + 4865540595714422341
static MULTIPLIER: U128 = U128::new(0x2360_ed05_1fc6_5da4, 0x4385_df64_9fcc_f645);

/// floor(2^128 / phi); one jump moves the state this many steps ahead.
static JUMP_STEP: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c835;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pcg64 {
    state: U128,
    // Odd for the lifetime of the generator.
    increment: U128,
    // High half of the last 64-bit output, not yet handed out by next32.
    cached32: Option<u32>,
}

impl Pcg64 {
    /// Seed from an arbitrary-precision integer with default options.
    pub fn seed<E: Into<Entropy>>(seed: E) -> Self {
        Self::from_seed_sequence(&SeedSequence::with_defaults(seed.into()))
    }

    /// Seed from a fully configured seed sequence (custom pool size or
    /// spawn key).
    pub fn from_seed_sequence(seq: &SeedSequence) -> Self {
        let w = seq.generate_state_u64(4);
        debug!("seeding from {} entropy words", seq.entropy().words().len());
        Self::seed_from_raw(w[0], w[1], w[2], w[3])
    }

    /// Run the constructor on an explicit initial state and sequence,
    /// each given as (high, low) limbs.  Reproduces reference snapshots
    /// taken right after seeding.
    pub fn seed_from_raw(state_high: u64, state_low: u64, inc_high: u64, inc_low: u64) -> Self {
        Self::initialize_raw(U128::new(state_high, state_low), U128::new(inc_high, inc_low))
    }

    /// Same as seed_from_raw, with native 128-bit values.
    pub fn from_state_and_sequence(state: u128, sequence: u128) -> Self {
        Self::initialize_raw(U128::from(state), U128::from(sequence))
    }

    /// Build from a persisted limb list `[state_high, state_low, inc_high, inc_low]`.
    pub fn from_limbs(limbs: &[u64]) -> Result<Self> {
        match limbs {
            &[sh, sl, ih, il] => Ok(Self::seed_from_raw(sh, sl, ih, il)),
            _ => Err(Status::invalid_argument(
                "raw state needs exactly 4 limbs", &limbs.len().to_string())),
        }
    }

    fn initialize_raw(init_state: U128, init_seq: U128) -> Self {
        trace!("initializing from state {:?} sequence {:?}", init_state, init_seq);
        let mut g = Self {
            state: U128::ZERO,
            increment: init_seq.shl1(),
            cached32: None,
        };
        g.increment.low |= 1;
        // The two warm-up steps around the state injection are part of
        // the reference stream; skipping either changes every output.
        g.step();
        g.state = g.state + init_state;
        g.step();
        g
    }

    /// Rebuild a generator from an exact state dump: the 128-bit state,
    /// the (already odd) increment and a pending 32-bit half, if any.
    /// No constructor steps are applied.  An even increment is rejected.
    pub fn from_state(state: u128, increment: u128, cached32: Option<u32>) -> Result<Self> {
        if increment & 1 == 0 {
            return Err(Status::invalid_argument("increment must be odd", &format!("{:#x}", increment)));
        }
        Ok(Self { state: U128::from(state), increment: U128::from(increment), cached32 })
    }

    /// Reassemble a generator from its exact internal fields.  Used by
    /// the snapshot decoder; no constructor steps are applied.
    pub(crate) fn from_parts(state: U128, increment: U128, cached32: Option<u32>) -> Result<Self> {
        if !increment.is_odd() {
            return Err(Status::corruption("increment must be odd", ""));
        }
        Ok(Self { state, increment, cached32 })
    }

    #[inline]
    fn step(&mut self) {
        self.state = self.state * MULTIPLIER + self.increment;
    }

    #[inline]
    fn output(&self) -> u64 {
        let xored = self.state.high ^ self.state.low;
        let rotation = (self.state.high >> 58) as u32;
        xored.rotate_right(rotation)
    }

    /// Step once and return the 64-bit output.  Any cached 32-bit half is
    /// discarded.
    #[must_use]
    pub fn next(mut self) -> (u64, Pcg64) {
        self.step();
        self.cached32 = None;
        (self.output(), self)
    }

    /// Return a 32-bit output.  A pending cached half is returned without
    /// stepping; otherwise the generator steps, returns the low half and
    /// caches the high half.
    #[must_use]
    pub fn next32(mut self) -> (u32, Pcg64) {
        if let Some(v) = self.cached32.take() {
            return (v, self);
        }
        self.step();
        let v = self.output();
        self.cached32 = Some((v >> 32) as u32);
        (v as u32, self)
    }

    /// Move the state `delta` steps forward in O(log delta) time.  The
    /// cached 32-bit half is discarded.
    #[must_use]
    pub fn advance(mut self, delta: u128) -> Pcg64 {
        let mut acc_mult = U128::ONE;
        let mut acc_plus = U128::ZERO;
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = self.increment;
        let mut delta = U128::from(delta);
        while !delta.is_zero() {
            if delta.is_odd() {
                acc_mult = acc_mult * cur_mult;
                acc_plus = acc_plus * cur_mult + cur_plus;
            }
            cur_plus = (cur_mult + U128::ONE) * cur_plus;
            cur_mult = cur_mult * cur_mult;
            delta = delta.shr1();
        }
        self.state = acc_mult * self.state + acc_plus;
        self.cached32 = None;
        self
    }

    /// A copy whose stream starts `jumps` jump-lengths ahead of this one.
    /// Jumped copies of one generator do not overlap in any practical run.
    #[must_use]
    pub fn jumped(self, jumps: u128) -> Pcg64 {
        trace!("jumping {} times", jumps);
        self.advance(JUMP_STEP.wrapping_mul(jumps))
    }

    pub fn state(&self) -> u128 {
        self.state.into()
    }

    pub fn increment(&self) -> u128 {
        self.increment.into()
    }

    pub fn cached32(&self) -> Option<u32> {
        self.cached32
    }

    pub(crate) fn state_limbs(&self) -> U128 {
        self.state
    }

    pub(crate) fn increment_limbs(&self) -> U128 {
        self.increment
    }
}
