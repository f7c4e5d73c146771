//! Portable lane-by-lane backend.
//!
//! Lane arithmetic uses ordinary `i16` operators, so debug builds trap any
//! coefficient that leaves the 16-bit range.

use core::ops;

use super::{Lanes, Transpose};
use crate::reduce;

/// `L` coefficients processed one lane at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar<const L: usize>(pub [i16; L]);

impl<const L: usize> ops::Add for Scalar<L> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const L: usize> ops::Sub for Scalar<L> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const L: usize> Lanes for Scalar<L> {
    const LANES: usize = L;

    #[inline]
    fn splat(v: i16) -> Self {
        Self([v; L])
    }

    #[inline]
    fn load(src: &[i16]) -> Self {
        Self(core::array::from_fn(|i| src[i]))
    }

    #[inline]
    fn store(self, dst: &mut [i16]) {
        dst[..L].copy_from_slice(&self.0);
    }

    #[inline]
    fn fqmul(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| reduce::fqmul(self.0[i], rhs.0[i])))
    }

    #[inline]
    fn barrett_reduce(self) -> Self {
        Self(self.0.map(reduce::barrett_reduce))
    }

    #[inline]
    fn deinterleave(self, other: Self) -> (Self, Self) {
        let pick = |i: usize| {
            if i < L {
                self.0[i]
            } else {
                other.0[i - L]
            }
        };
        (
            Self(core::array::from_fn(|i| pick(2 * i))),
            Self(core::array::from_fn(|i| pick(2 * i + 1))),
        )
    }

    #[inline]
    fn interleave(self, other: Self) -> (Self, Self) {
        let zip = |i: usize| {
            if i % 2 == 0 {
                self.0[i / 2]
            } else {
                other.0[i / 2]
            }
        };
        (
            Self(core::array::from_fn(zip)),
            Self(core::array::from_fn(|i| zip(L + i))),
        )
    }
}

/// Lane `i` of the transposed pair: groups of `g` lanes alternate between
/// `a` and `b`, starting from group `first`.
#[inline]
fn trn<const L: usize>(a: &[i16; L], b: &[i16; L], g: usize, first: usize) -> [i16; L] {
    core::array::from_fn(|i| {
        let group = i / g;
        let src = (group & !1) + first;
        let lane = src * g + i % g;
        if group % 2 == 0 { a[lane] } else { b[lane] }
    })
}

impl<const L: usize> Transpose for Scalar<L> {
    #[inline]
    fn trn_lane(self, other: Self) -> (Self, Self) {
        (Self(trn(&self.0, &other.0, 1, 0)), Self(trn(&self.0, &other.0, 1, 1)))
    }

    #[inline]
    fn trn_pair(self, other: Self) -> (Self, Self) {
        (Self(trn(&self.0, &other.0, 2, 0)), Self(trn(&self.0, &other.0, 2, 1)))
    }

    #[inline]
    fn trn_half(self, other: Self) -> (Self, Self) {
        (Self(trn(&self.0, &other.0, 4, 0)), Self(trn(&self.0, &other.0, 4, 1)))
    }
}
