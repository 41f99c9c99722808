//! 128-bit unsigned arithmetic over a pair of 64-bit limbs.
//!
//! All operations wrap modulo 2^128.  The product is assembled from
//! 32-bit partial products with explicit carry propagation, so the
//! results agree bit-for-bit with generators built on narrower words.

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct U128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

static LOW32: u64 = 0xffff_ffff;

impl U128 {
    pub(crate) const ZERO: U128 = U128::new(0, 0);
    pub(crate) const ONE: U128 = U128::new(0, 1);

    #[inline]
    pub(crate) const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    #[inline]
    pub(crate) fn is_odd(&self) -> bool {
        self.low & 1 == 1
    }

    /// Shift left by one, carrying the top bit of the low limb upward.
    #[inline]
    pub(crate) fn shl1(self) -> Self {
        Self::new((self.high << 1) | (self.low >> 63), self.low << 1)
    }

    /// Shift right by one, carrying the bottom bit of the high limb downward.
    #[inline]
    pub(crate) fn shr1(self) -> Self {
        Self::new(self.high >> 1, (self.low >> 1) | (self.high << 63))
    }
}

/// Full 64x64 -> 128 bit product of two limbs.
#[inline]
fn mul_wide(x: u64, y: u64) -> U128 {
    let x0 = x & LOW32;
    let x1 = x >> 32;
    let y0 = y & LOW32;
    let y1 = y >> 32;

    let w0 = x0 * y0;
    let t = x1 * y0 + (w0 >> 32);
    let mut w1 = t & LOW32;
    let w2 = t >> 32;
    w1 += x0 * y1;
    let high = x1 * y1 + w2 + (w1 >> 32);
    U128::new(high, x.wrapping_mul(y))
}

impl Add for U128 {
    type Output = U128;

    #[inline]
    fn add(self, rhs: U128) -> U128 {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let high = self.high.wrapping_add(rhs.high).wrapping_add(carry as u64);
        U128::new(high, low)
    }
}

impl Mul for U128 {
    type Output = U128;

    #[inline]
    fn mul(self, rhs: U128) -> U128 {
        // Cross terms only reach the high limb; anything above 2^128 is dropped.
        let mut r = mul_wide(self.low, rhs.low);
        r.high = r.high
            .wrapping_add(self.high.wrapping_mul(rhs.low))
            .wrapping_add(self.low.wrapping_mul(rhs.high));
        r
    }
}

impl From<u128> for U128 {
    #[inline]
    fn from(v: u128) -> Self {
        U128::new((v >> 64) as u64, v as u64)
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(v: U128) -> Self {
        ((v.high as u128) << 64) | v.low as u128
    }
}
