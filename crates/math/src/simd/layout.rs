//! Moving coefficients between memory and groups of four batches.

use super::{Lanes, Transpose};

/// Four consecutive batches: `4 * V::LANES` coefficients held in registers.
pub type Quad<V> = [V; 4];

/// Load `4 * LANES` coefficients in memory order.
#[inline]
pub fn load_quad<V: Lanes>(src: &[i16]) -> Quad<V> {
    core::array::from_fn(|j| V::load(&src[j * V::LANES..]))
}

/// Store a quad back in memory order.
#[inline]
pub fn store_quad<V: Lanes>(quad: Quad<V>, dst: &mut [i16]) {
    for (j, v) in quad.into_iter().enumerate() {
        v.store(&mut dst[j * V::LANES..]);
    }
}

/// Stride-4 gather: batch `r` receives coefficients `r, r + 4, r + 8, ...`.
#[inline]
pub fn load_deinterleaved<V: Lanes>(src: &[i16]) -> Quad<V> {
    let [q0, q1, q2, q3] = load_quad::<V>(src);
    let (t0, t1) = q0.deinterleave(q1);
    let (t2, t3) = q2.deinterleave(q3);
    let (a0, a2) = t0.deinterleave(t2);
    let (a1, a3) = t1.deinterleave(t3);
    [a0, a1, a2, a3]
}

/// Stride-4 scatter, the inverse of [`load_deinterleaved`].
#[inline]
pub fn store_interleaved<V: Lanes>(quad: Quad<V>, dst: &mut [i16]) {
    let [a0, a1, a2, a3] = quad;
    let (lo02, hi02) = a0.interleave(a2);
    let (lo13, hi13) = a1.interleave(a3);
    let (o0, o1) = lo02.interleave(lo13);
    let (o2, o3) = hi02.interleave(hi13);
    store_quad([o0, o1, o2, o3], dst);
}

/// Transpose the two 4x4 tiles of an 8-lane quad.
///
/// Lanes `0..4` of the four batches form one tile, lanes `4..8` the other;
/// each tile is transposed in place.
#[inline]
pub fn transpose<V: Transpose>(quad: Quad<V>) -> Quad<V> {
    let [a, b, c, d] = quad;
    let (t0, t1) = a.trn_lane(b);
    let (t2, t3) = c.trn_lane(d);
    let (r0, r2) = t0.trn_pair(t2);
    let (r1, r3) = t1.trn_pair(t3);
    [r0, r1, r2, r3]
}
