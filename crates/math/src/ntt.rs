//! Merged-layer Number-Theoretic Transform over `Z_q[X]/(X^{256}+1)`.
//!
//! - [`forward_ntt`]: standard order -> bit-reversed order, unreduced.
//! - [`inverse_ntt`]: bit-reversed order -> standard order, scaled by `R`.
//!
//! Both run as two passes. One pass covers the distance-128 layer over the
//! whole polynomial; the other runs the six remaining layers inside each
//! 128-coefficient half, with 8-lane batches. Between the distance-4 and
//! distance-2 layers each 32-coefficient quad is transposed as two 4x4 tiles
//! so the finest layers also operate on whole batches.
//!
//! Twiddles come from [`FORWARD_ZETAS`] / [`INVERSE_ZETAS`]; the slot layout
//! of each layer is described by [`FORWARD_STAGES`] / [`INVERSE_STAGES`].

use crate::{
    N,
    simd::{
        Lanes, NTT_LANES, NttLanes, Quad, Transpose, ct_butterfly, gs_butterfly,
        load_deinterleaved, load_quad, store_interleaved, store_quad, transpose,
    },
    zetas::{
        F_INV, FORWARD_BLOCK, FORWARD_STAGES, FORWARD_TOP, FORWARD_ZETAS, INVERSE_BLOCK,
        INVERSE_STAGES, INVERSE_TOP, INVERSE_ZETAS,
    },
};

/// Coefficients held by one quad of 8-lane batches.
const QUAD: usize = 4 * NTT_LANES;

/// Quads per 128-coefficient half.
const QUADS: usize = N / 2 / QUAD;

/// Forward NTT (in-place) with the build's native batch type.
///
/// Input coefficients must satisfy `|c| < q`; outputs are bounded by `8q`
/// and left unreduced.
#[inline]
pub fn forward_ntt(r: &mut [i16; N]) {
    forward_ntt_with::<NttLanes>(r);
}

/// Inverse NTT (in-place) with the build's native batch type.
///
/// Input coefficients must satisfy `|c| < q`. Every output is multiplied by
/// the Montgomery factor `R = 2^{16}` and lies in `(-q, q)`.
#[inline]
pub fn inverse_ntt(r: &mut [i16; N]) {
    inverse_ntt_with::<NttLanes>(r);
}

#[inline]
fn ct_quads<V: Lanes>(x: &mut Quad<V>, y: &mut Quad<V>, zeta: V) {
    for (x, y) in x.iter_mut().zip(y.iter_mut()) {
        (*x, *y) = ct_butterfly(*x, *y, zeta);
    }
}

#[inline]
fn gs_quads<V: Lanes>(x: &mut Quad<V>, y: &mut Quad<V>, zeta: V) {
    for (x, y) in x.iter_mut().zip(y.iter_mut()) {
        (*x, *y) = gs_butterfly(*x, *y, zeta);
    }
}

/// Forward NTT on an explicit 8-lane batch type.
pub fn forward_ntt_with<V: Transpose>(r: &mut [i16; N]) {
    const { assert!(V::LANES == NTT_LANES) }

    let top = V::splat(FORWARD_ZETAS[FORWARD_TOP]);
    let (lo, hi) = r.split_at_mut(N / 2);
    for (lo, hi) in lo.chunks_exact_mut(QUAD).zip(hi.chunks_exact_mut(QUAD)) {
        let mut x = load_quad::<V>(lo);
        let mut y = load_quad::<V>(hi);
        ct_quads(&mut x, &mut y, top);
        store_quad(x, lo);
        store_quad(y, hi);
    }

    for (half, zetas) in r
        .chunks_exact_mut(N / 2)
        .zip(FORWARD_ZETAS.chunks_exact(FORWARD_BLOCK))
    {
        forward_half::<V>(half, zetas);
    }
}

/// Distances 64 down to 2 on one 128-coefficient half.
#[inline]
fn forward_half<V: Transpose>(half: &mut [i16], zetas: &[i16]) {
    let [l64, l32, l16, l8, l4, l2] = FORWARD_STAGES;

    let mut quads: [Quad<V>; QUADS] = core::array::from_fn(|i| load_quad(&half[QUAD * i..]));
    {
        let [q0, q1, q2, q3] = &mut quads;
        let z = V::splat(zetas[l64.offset]);
        ct_quads(q0, q2, z);
        ct_quads(q1, q3, z);
        ct_quads(q0, q1, V::splat(zetas[l32.offset]));
        ct_quads(q2, q3, V::splat(zetas[l32.offset + 1]));
    }

    for (i, quad) in quads.into_iter().enumerate() {
        let [v0, v1, v2, v3] = quad;

        let z = V::splat(zetas[l16.offset + i]);
        let (v0, v2) = ct_butterfly(v0, v2, z);
        let (v1, v3) = ct_butterfly(v1, v3, z);

        let (v0, v1) = ct_butterfly(v0, v1, V::splat(zetas[l8.offset + 2 * i]));
        let (v2, v3) = ct_butterfly(v2, v3, V::splat(zetas[l8.offset + 2 * i + 1]));

        // Pair 4-coefficient runs: lanes 0..4 from the first batch of each
        // pair, lanes 4..8 from the second.
        let (t0, t1) = v0.trn_half(v2);
        let (t2, t3) = v1.trn_half(v3);
        let base = l4.offset + 16 * i;
        let (v0, v1) = ct_butterfly(t0, t1, V::load(&zetas[base..]));
        let (v2, v3) = ct_butterfly(t2, t3, V::load(&zetas[base + 8..]));

        let [v0, v1, v2, v3] = transpose([v0, v1, v2, v3]);
        let z = V::load(&zetas[l2.offset + 8 * i..]);
        let (v0, v2) = ct_butterfly(v0, v2, z);
        let (v1, v3) = ct_butterfly(v1, v3, z);

        store_interleaved([v0, v1, v2, v3], &mut half[QUAD * i..]);
    }
}

/// Inverse NTT on an explicit 8-lane batch type.
pub fn inverse_ntt_with<V: Transpose>(r: &mut [i16; N]) {
    const { assert!(V::LANES == NTT_LANES) }

    for (half, zetas) in r
        .chunks_exact_mut(N / 2)
        .zip(INVERSE_ZETAS.chunks_exact(INVERSE_BLOCK))
    {
        inverse_half::<V>(half, zetas);
    }

    // Distance 128, with the 128^{-1} * R^2 scale folded into both outputs.
    let scale = V::splat(F_INV);
    let top = V::splat(INVERSE_ZETAS[INVERSE_TOP]);
    let (lo, hi) = r.split_at_mut(N / 2);
    for (lo, hi) in lo.chunks_exact_mut(QUAD).zip(hi.chunks_exact_mut(QUAD)) {
        let x = load_quad::<V>(lo);
        let y = load_quad::<V>(hi);
        store_quad(core::array::from_fn(|j| (x[j] + y[j]).fqmul(scale)), lo);
        store_quad(core::array::from_fn(|j| (y[j] - x[j]).fqmul(top)), hi);
    }
}

/// Distances 2 up to 64 on one 128-coefficient half.
#[inline]
fn inverse_half<V: Transpose>(half: &mut [i16], zetas: &[i16]) {
    let [l2, l4, l8, l16, l32, l64] = INVERSE_STAGES;

    let mut quads: [Quad<V>; QUADS] = core::array::from_fn(|i| {
        let [v0, v1, v2, v3] = load_deinterleaved::<V>(&half[QUAD * i..]);

        let z = V::load(&zetas[l2.offset + 8 * i..]);
        let (v0, v2) = gs_butterfly(v0, v2, z);
        let (v1, v3) = gs_butterfly(v1, v3, z);

        let [v0, v1, v2, v3] = transpose([v0, v1, v2, v3]);
        let base = l4.offset + 16 * i;
        let (v0, v1) = gs_butterfly(v0, v1, V::load(&zetas[base..]));
        let (v2, v3) = gs_butterfly(v2, v3, V::load(&zetas[base + 8..]));

        let z = V::load(&zetas[l8.offset + 8 * i..]);
        let (v0, v2) = gs_butterfly(v0, v2, z);
        let (v1, v3) = gs_butterfly(v1, v3, z);

        // Sums are below 8q here; three more doubling layers follow.
        let [v0, v1, v2, v3] = [v0, v1, v2, v3].map(Lanes::barrett_reduce);

        let (t0, t1) = v0.trn_half(v1);
        let (t2, t3) = v2.trn_half(v3);
        let z = V::splat(zetas[l16.offset + i]);
        let (v0, v2) = gs_butterfly(t0, t1, z);
        let (v1, v3) = gs_butterfly(t2, t3, z);
        [v0, v1, v2, v3]
    });

    {
        let [q0, q1, q2, q3] = &mut quads;
        gs_quads(q0, q1, V::splat(zetas[l32.offset]));
        gs_quads(q2, q3, V::splat(zetas[l32.offset + 1]));
        let z = V::splat(zetas[l64.offset]);
        gs_quads(q0, q2, z);
        gs_quads(q1, q3, z);
    }

    for (i, quad) in quads.into_iter().enumerate() {
        store_quad(quad, &mut half[QUAD * i..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Q,
        reduce::{barrett_reduce, caddq, fqmul},
        simd::Scalar,
        zetas::ZETAS,
    };

    fn canonical(c: i16) -> i16 {
        caddq(barrett_reduce(c))
    }

    /// Layer-by-layer textbook transform.
    fn reference_forward(r: &mut [i16; N]) {
        let mut k = 1;
        let mut len = 128;
        while len >= 2 {
            for start in (0..N).step_by(2 * len) {
                let zeta = ZETAS[k];
                k += 1;
                for j in start..start + len {
                    let t = fqmul(zeta, r[j + len]);
                    r[j + len] = barrett_reduce(r[j] - t);
                    r[j] = barrett_reduce(r[j] + t);
                }
            }
            len >>= 1;
        }
    }

    fn reference_inverse(r: &mut [i16; N]) {
        let mut k = 127;
        let mut len = 2;
        while len <= 128 {
            for start in (0..N).step_by(2 * len) {
                let zeta = ZETAS[k];
                k -= 1;
                for j in start..start + len {
                    let t = r[j];
                    r[j] = barrett_reduce(t + r[j + len]);
                    r[j + len] = fqmul(zeta, r[j + len] - t);
                }
            }
            len <<= 1;
        }
        for c in r.iter_mut() {
            *c = fqmul(*c, F_INV);
        }
    }

    fn sample(seed: u32) -> [i16; N] {
        let mut state = seed;
        core::array::from_fn(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ((state >> 16) % (2 * Q as u32 - 1)) as i16 - (Q - 1)
        })
    }

    #[test]
    fn forward_matches_textbook_layers() {
        for seed in 0..8 {
            let input = sample(seed);
            let mut want = input;
            reference_forward(&mut want);
            let mut got = input;
            forward_ntt(&mut got);
            assert_eq!(got.map(canonical), want.map(canonical), "seed {seed}");
        }
    }

    #[test]
    fn inverse_matches_textbook_layers() {
        for seed in 0..8 {
            let input = sample(100 + seed);
            let mut want = input;
            reference_inverse(&mut want);
            let mut got = input;
            inverse_ntt(&mut got);
            assert!(got.iter().all(|c| c.abs() < Q));
            assert_eq!(got.map(canonical), want.map(canonical), "seed {seed}");
        }
    }

    #[test]
    fn backends_agree_bit_for_bit() {
        let input = sample(7);
        let mut native = input;
        let mut portable = input;
        forward_ntt(&mut native);
        forward_ntt_with::<Scalar<8>>(&mut portable);
        assert_eq!(native, portable);

        let mut native = input;
        let mut portable = input;
        inverse_ntt(&mut native);
        inverse_ntt_with::<Scalar<8>>(&mut portable);
        assert_eq!(native, portable);
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        for v in [Q - 1, -(Q - 1)] {
            let mut a = [v; N];
            forward_ntt_with::<Scalar<8>>(&mut a);
            assert!(a.iter().all(|c| (c.abs() as i32) < 8 * Q as i32));

            let mut b = [v; N];
            inverse_ntt_with::<Scalar<8>>(&mut b);
            assert!(b.iter().all(|c| c.abs() < Q));
        }
    }

    #[test]
    fn zero_is_fixed() {
        let mut a = [0i16; N];
        forward_ntt(&mut a);
        assert_eq!(a, [0; N]);
        inverse_ntt(&mut a);
        assert_eq!(a, [0; N]);
    }

    #[test]
    fn all_ones_round_trip_scales_by_r() {
        let mut a = [1i16; N];
        forward_ntt(&mut a);
        for c in &mut a {
            *c = barrett_reduce(*c);
        }
        inverse_ntt(&mut a);
        assert!(a.iter().all(|&c| caddq(c) == 2285));
    }

    #[test]
    fn round_trip_multiplies_by_r() {
        let mut a = sample(42);
        let original = a;
        forward_ntt(&mut a);
        assert_ne!(a, original);
        for c in &mut a {
            *c = barrett_reduce(*c);
        }
        inverse_ntt(&mut a);
        for (got, orig) in a.iter().zip(original) {
            // fqmul by 1 strips the R factor
            assert_eq!(canonical(fqmul(*got, 1)), canonical(orig));
        }
    }
}
