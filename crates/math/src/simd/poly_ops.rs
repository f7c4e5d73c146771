use super::{Lanes, Quad, load_deinterleaved, store_interleaved};
use crate::{N, reduce::MONT_SQ, zetas::ZETAS};

/// Barrett-reduce all `N` coefficients in-place.
#[inline]
pub fn reduce<V: Lanes>(c: &mut [i16; N]) {
    const { assert!(N % V::LANES == 0) }
    for ch in c.chunks_exact_mut(V::LANES) {
        V::load(ch).barrett_reduce().store(ch);
    }
}

/// `c[i] = barrett(c[i] + a[i])`.
#[inline]
pub fn add_reduce<V: Lanes>(c: &mut [i16; N], a: &[i16; N]) {
    const { assert!(N % V::LANES == 0) }
    for (ch, a) in c
        .chunks_exact_mut(V::LANES)
        .zip(a.chunks_exact(V::LANES))
    {
        (V::load(ch) + V::load(a)).barrett_reduce().store(ch);
    }
}

/// `c[i] = barrett(c[i] + a[i] + b[i])`.
#[inline]
pub fn add_add_reduce<V: Lanes>(c: &mut [i16; N], a: &[i16; N], b: &[i16; N]) {
    const { assert!(N % V::LANES == 0) }
    for ((ch, a), b) in c
        .chunks_exact_mut(V::LANES)
        .zip(a.chunks_exact(V::LANES))
        .zip(b.chunks_exact(V::LANES))
    {
        (V::load(ch) + V::load(a) + V::load(b))
            .barrett_reduce()
            .store(ch);
    }
}

/// `c[i] = barrett(c[i] - a[i])`.
#[inline]
pub fn sub_reduce<V: Lanes>(c: &mut [i16; N], a: &[i16; N]) {
    const { assert!(N % V::LANES == 0) }
    for (ch, a) in c
        .chunks_exact_mut(V::LANES)
        .zip(a.chunks_exact(V::LANES))
    {
        (V::load(ch) - V::load(a)).barrett_reduce().store(ch);
    }
}

/// `c_i <- c_i * scalar * R^{-1} mod q`.
///
/// With `scalar = R^2 mod q` this converts into Montgomery form.
#[inline]
pub fn mul_scalar_montgomery<V: Lanes>(c: &mut [i16; N], scalar: i16) {
    const { assert!(N % V::LANES == 0) }
    let s = V::splat(scalar);
    for ch in c.chunks_exact_mut(V::LANES) {
        V::load(ch).fqmul(s).store(ch);
    }
}

/// Degree-2 products for `LANES` consecutive 4-coefficient groups.
///
/// Inputs are role vectors from [`load_deinterleaved`]. Group `g` multiplies
/// `(a0, a1)` modulo `X^2 - ζ_g` and `(a2, a3)` modulo `X^2 + ζ_g`, with
/// `ζ_g = ZETAS[64 + g]`. Every output lane is below `2q` in magnitude.
#[inline]
fn group_product<V: Lanes>(a: Quad<V>, b: Quad<V>, z: V) -> Quad<V> {
    let [a0, a1, a2, a3] = a;
    let [b0, b1, b2, b3] = b;
    [
        a0.fqmul(b0) + a1.fqmul(b1).fqmul(z),
        a0.fqmul(b1) + a1.fqmul(b0),
        a2.fqmul(b2) - a3.fqmul(b3).fqmul(z),
        a2.fqmul(b3) + a3.fqmul(b2),
    ]
}

#[inline]
fn group_zetas<V: Lanes>(group: usize) -> V {
    V::load(&ZETAS[64 + group..])
}

/// Pointwise product of two NTT-domain polynomials, `a∘b * R^{-1}`.
///
/// Unreduced: output magnitude below `2q`.
#[inline]
pub fn basemul<V: Lanes>(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
    const { assert!((N / 4) % V::LANES == 0) }
    let mut r = [0i16; N];
    for group in (0..N / 4).step_by(V::LANES) {
        let base = 4 * group;
        let prod = group_product(
            load_deinterleaved::<V>(&a[base..]),
            load_deinterleaved::<V>(&b[base..]),
            group_zetas(group),
        );
        store_interleaved(prod, &mut r[base..]);
    }
    r
}

/// NTT-domain inner product `Σ_k a[k]∘b[k] * R^{-1}`.
///
/// Products are summed over all `k` before one Barrett pass, so `a.len()`
/// must not exceed 4 (the sum stays below `8q`). When `to_mont` is set the
/// reduced result is multiplied by `R^2 mod q` through `fqmul`.
#[inline]
pub fn basemul_acc<V: Lanes>(a: &[&[i16; N]], b: &[&[i16; N]], to_mont: bool) -> [i16; N] {
    const { assert!((N / 4) % V::LANES == 0) }
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(!a.is_empty() && a.len() <= 4);

    let mont = V::splat(MONT_SQ);
    let mut r = [0i16; N];
    for group in (0..N / 4).step_by(V::LANES) {
        let base = 4 * group;
        let z = group_zetas::<V>(group);
        let mut acc = [V::splat(0); 4];
        for (a, b) in a.iter().zip(b) {
            let prod = group_product(
                load_deinterleaved::<V>(&a[base..]),
                load_deinterleaved::<V>(&b[base..]),
                z,
            );
            for (acc, p) in acc.iter_mut().zip(prod) {
                *acc = *acc + p;
            }
        }
        let out = acc.map(|v| {
            let v = v.barrett_reduce();
            if to_mont { v.fqmul(mont) } else { v }
        });
        store_interleaved(out, &mut r[base..]);
    }
    r
}
