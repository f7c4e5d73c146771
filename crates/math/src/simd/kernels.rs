use core::simd::{Simd, prelude::*, simd_swizzle};

use super::{Lanes, Transpose};
use crate::{Q, reduce::QINV};

/// Lane count used by kernel-level unit tests (16 x i16 = 256-bit).
#[cfg(test)]
const DEFAULT_LANES: usize = 16;

/// Barrett reduction: `r \equiv a \pmod{q}`, centered `|r| <= q/2`.
#[inline]
#[must_use]
pub fn barrett_reduce_vec<const L: usize>(a: Simd<i16, L>) -> Simd<i16, L> {
    const V: i32 = 20159;
    let aw: Simd<i32, L> = a.cast();
    let t =
        ((Simd::<i32, L>::splat(V) * aw + Simd::splat(1 << 25)) >> Simd::splat(26)).cast::<i16>();
    a - t * Simd::splat(Q)
}

/// Montgomery reduction: `a * R^{-1} mod q`, `R = 2^{16}`.
#[inline]
#[must_use]
pub fn montgomery_reduce_vec<const L: usize>(a: Simd<i32, L>) -> Simd<i16, L> {
    let qinv = Simd::<i32, L>::splat(QINV as i32);
    let q = Simd::<i32, L>::splat(Q as i32);
    let s16 = Simd::splat(16);
    let a_lo = (a << s16) >> s16;
    let t = ((a_lo * qinv) << s16) >> s16;
    ((a - t * q) >> s16).cast::<i16>()
}

/// Field multiply: `a * b * R^{-1} mod q`.
#[inline]
#[must_use]
pub fn fqmul_vec<const L: usize>(a: Simd<i16, L>, b: Simd<i16, L>) -> Simd<i16, L> {
    montgomery_reduce_vec(a.cast::<i32>() * b.cast::<i32>())
}

impl<const L: usize> Lanes for Simd<i16, L> {
    const LANES: usize = L;

    #[inline]
    fn splat(v: i16) -> Self {
        Simd::splat(v)
    }

    #[inline]
    fn load(src: &[i16]) -> Self {
        Simd::from_slice(src)
    }

    #[inline]
    fn store(self, dst: &mut [i16]) {
        self.copy_to_slice(dst);
    }

    #[inline]
    fn fqmul(self, rhs: Self) -> Self {
        fqmul_vec(self, rhs)
    }

    #[inline]
    fn barrett_reduce(self) -> Self {
        barrett_reduce_vec(self)
    }

    #[inline]
    fn deinterleave(self, other: Self) -> (Self, Self) {
        Simd::deinterleave(self, other)
    }

    #[inline]
    fn interleave(self, other: Self) -> (Self, Self) {
        Simd::interleave(self, other)
    }
}

impl Transpose for Simd<i16, 8> {
    #[inline]
    fn trn_lane(self, other: Self) -> (Self, Self) {
        (
            simd_swizzle!(self, other, [0, 8, 2, 10, 4, 12, 6, 14]),
            simd_swizzle!(self, other, [1, 9, 3, 11, 5, 13, 7, 15]),
        )
    }

    #[inline]
    fn trn_pair(self, other: Self) -> (Self, Self) {
        (
            simd_swizzle!(self, other, [0, 1, 8, 9, 4, 5, 12, 13]),
            simd_swizzle!(self, other, [2, 3, 10, 11, 6, 7, 14, 15]),
        )
    }

    #[inline]
    fn trn_half(self, other: Self) -> (Self, Self) {
        (
            simd_swizzle!(self, other, [0, 1, 2, 3, 8, 9, 10, 11]),
            simd_swizzle!(self, other, [4, 5, 6, 7, 12, 13, 14, 15]),
        )
    }
}
