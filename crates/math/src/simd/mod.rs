//! Lane-parallel batch abstraction shared by every kernel.
//!
//! [`Lanes`] is a fixed-width batch of `i16` coefficients with the modular
//! kernels the transforms need; [`Transpose`] adds the 8-lane shuffles used
//! by the merged NTT network. Two backends exist:
//!
//! - [`Scalar<L>`]: plain arrays, lane-by-lane, always available.
//! - `core::simd::Simd<i16, L>`: enabled by the `simd` feature.
//!
//! [`Native`] names whichever one the build selected.

mod butterfly;
#[cfg(feature = "simd")]
mod kernels;
mod layout;
mod poly_ops;
mod scalar;

use core::ops;

pub use butterfly::{ct_butterfly, gs_butterfly};
#[cfg(feature = "simd")]
pub use kernels::{barrett_reduce_vec, fqmul_vec, montgomery_reduce_vec};
pub use layout::{
    Quad, load_deinterleaved, load_quad, store_interleaved, store_quad, transpose,
};
pub use poly_ops::{
    add_add_reduce, add_reduce, basemul, basemul_acc, mul_scalar_montgomery, reduce, sub_reduce,
};
pub use scalar::Scalar;

/// Backend selected at build time.
#[cfg(feature = "simd")]
pub type Native<const L: usize> = core::simd::Simd<i16, L>;

/// Backend selected at build time.
#[cfg(not(feature = "simd"))]
pub type Native<const L: usize> = Scalar<L>;

/// Lane count the merged NTT network is laid out for.
pub const NTT_LANES: usize = 8;

/// Lane count used by the coefficient-wise passes.
pub const WIDE_LANES: usize = 16;

/// Batch type driving the NTT.
pub type NttLanes = Native<NTT_LANES>;

/// Batch type driving reduce/add/sub and the accumulate kernel.
pub type WideLanes = Native<WIDE_LANES>;

/// A batch of `LANES` signed 16-bit coefficients.
///
/// Addition and subtraction are plain lane-wise `i16` arithmetic; callers keep
/// magnitudes inside the 16-bit range.
pub trait Lanes: Copy + ops::Add<Output = Self> + ops::Sub<Output = Self> {
    /// Number of coefficients in one batch.
    const LANES: usize;

    /// Broadcast `v` to every lane.
    fn splat(v: i16) -> Self;

    /// Read `LANES` coefficients from the front of `src`.
    fn load(src: &[i16]) -> Self;

    /// Write `LANES` coefficients to the front of `dst`.
    fn store(self, dst: &mut [i16]);

    /// Lane-wise `a * b * R^{-1} mod q`.
    #[must_use]
    fn fqmul(self, rhs: Self) -> Self;

    /// Lane-wise centred Barrett reduction.
    #[must_use]
    fn barrett_reduce(self) -> Self;

    /// Even-indexed and odd-indexed lanes of `self ++ other`.
    fn deinterleave(self, other: Self) -> (Self, Self);

    /// Inverse of [`Lanes::deinterleave`]: zip `self` and `other` lane by lane.
    fn interleave(self, other: Self) -> (Self, Self);
}

/// 8-lane transposition primitives (lanes grouped 1, 2 or 4 at a time).
///
/// Each returns `(first, second)` where `first` takes the even-numbered
/// groups of both inputs and `second` the odd-numbered ones, alternating
/// `self`/`other`.
pub trait Transpose: Lanes {
    /// `[a0 b0 a2 b2 a4 b4 a6 b6]`, `[a1 b1 a3 b3 a5 b5 a7 b7]`.
    fn trn_lane(self, other: Self) -> (Self, Self);

    /// `[a0 a1 b0 b1 a4 a5 b4 b5]`, `[a2 a3 b2 b3 a6 a7 b6 b7]`.
    fn trn_pair(self, other: Self) -> (Self, Self);

    /// `[a0..a3 b0..b3]`, `[a4..a7 b4..b7]`.
    fn trn_half(self, other: Self) -> (Self, Self);
}
