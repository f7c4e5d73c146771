//! Montgomery and Barrett modular reduction for the Kyber field (q = 3329).
//!
//! These are the scalar reference kernels. The lane-parallel versions in
//! [`crate::simd`] must agree with them coefficient for coefficient.

use crate::Q;

/// q^{-1} mod 2^{16} (Montgomery inverse).
pub const QINV: i16 = -3327;

/// 2^{16} mod q, centred (Montgomery radix residue).
pub const MONT: i16 = -1044;

/// 2^{32} mod q. `fqmul(a, MONT_SQ)` moves `a` into Montgomery form.
pub const MONT_SQ: i16 = 1353;

/// Barrett multiplier `round(2^{26} / q)`.
const BARRETT_V: i32 = ((1i32 << 26) + (Q as i32) / 2) / (Q as i32);

/// Largest magnitude `montgomery_reduce` accepts: `q * 2^{15}`.
const MONT_BOUND: i32 = (Q as i32) << 15;

/// Montgomery reduction: computes `a * R^{-1} mod q` where R = 2^{16}.
///
/// Input: `a in {-q*2^{15}, ..., q*2^{15} - 1}`. Output: `r in {-q+1, ...,
/// q-1}` with `r \equiv a*R^{-1} (mod q)`.
#[inline]
#[must_use]
pub const fn montgomery_reduce(a: i32) -> i16 {
    debug_assert!(-MONT_BOUND <= a && a < MONT_BOUND);
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Field multiplication followed by Montgomery reduction: `a*b*R^{-1} mod q`.
#[inline]
#[must_use]
pub const fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce((a as i32) * (b as i32))
}

/// Barrett reduction: centred reduction modulo q.
///
/// Accepts every `i16`. Output: `r in {-floor(q/2), ..., floor(q/2)}` with
/// `r \equiv a (mod q)`.
#[inline]
#[must_use]
pub const fn barrett_reduce(a: i16) -> i16 {
    let t = ((BARRETT_V * (a as i32) + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Map `a in (-q, q)` to its canonical representative in `[0, q)`.
#[inline]
#[must_use]
pub const fn caddq(a: i16) -> i16 {
    a + ((a >> 15) & Q)
}

/// Conditionally subtract q: `a in [0, 2q)` -> `[0, q)`.
#[inline]
#[must_use]
pub const fn csubq(a: i16) -> i16 {
    caddq(a - Q)
}
