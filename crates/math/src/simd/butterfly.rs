use super::Lanes;

/// Forward (Cooley-Tukey) butterfly: `(x + z*y*R^{-1}, x - z*y*R^{-1})`.
#[inline]
pub fn ct_butterfly<V: Lanes>(x: V, y: V, zeta: V) -> (V, V) {
    let t = y.fqmul(zeta);
    (x + t, x - t)
}

/// Inverse (Gentleman-Sande) butterfly: `(x + y, z*(y - x)*R^{-1})`.
///
/// The sum is left unreduced; the inverse network inserts Barrett passes
/// where the growth requires them.
#[inline]
pub fn gs_butterfly<V: Lanes>(x: V, y: V, zeta: V) -> (V, V) {
    (x + y, (y - x).fqmul(zeta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reduce,
        simd::{Native, Scalar},
    };

    const M: usize = 16;

    #[test]
    fn forward_butterfly_matches_scalar() {
        let lo: [i16; M] = core::array::from_fn(|i| (i as i16) * 13);
        let hi: [i16; M] = core::array::from_fn(|i| (i as i16) * 7 + 100);
        let zeta = 1234i16;

        let (a, b) = ct_butterfly(
            <Native<M>>::load(&lo),
            <Native<M>>::load(&hi),
            <Native<M>>::splat(zeta),
        );
        let (mut got_lo, mut got_hi) = ([0i16; M], [0i16; M]);
        a.store(&mut got_lo);
        b.store(&mut got_hi);

        for i in 0..M {
            let t = reduce::fqmul(zeta, hi[i]);
            assert_eq!(got_lo[i], lo[i] + t);
            assert_eq!(got_hi[i], lo[i] - t);
        }
    }

    #[test]
    fn inverse_butterfly_matches_scalar() {
        let lo: [i16; M] = core::array::from_fn(|i| (i as i16) * 11 - 200);
        let hi: [i16; M] = core::array::from_fn(|i| (i as i16) * 5 + 50);
        let zeta = -567i16;

        let (a, b) = gs_butterfly(Scalar(lo), Scalar(hi), Scalar::splat(zeta));
        for i in 0..M {
            assert_eq!(a.0[i], lo[i] + hi[i]);
            assert_eq!(b.0[i], reduce::fqmul(zeta, hi[i] - lo[i]));
        }
    }

    #[test]
    fn butterflies_invert_up_to_two() {
        // GS(CT(x, y, z), z^{-1}) = (2x, -2y)
        let zeta = crate::zetas::ZETAS[5];
        // z * z' * R^{-2} = 1, found by brute force
        let inv = (-1664i16..=1664)
            .find(|&c| reduce::caddq(reduce::fqmul(reduce::fqmul(zeta, c), 1)) == 1)
            .expect("every nonzero residue is invertible");
        let x = Scalar([5i16, -700, 1200, 0]);
        let y = Scalar([-3i16, 1600, -1500, 42]);
        let (a, b) = ct_butterfly(x, y, Scalar::splat(zeta));
        let (s, d) = gs_butterfly(a, b, Scalar::splat(inv));
        for i in 0..4 {
            assert_eq!(reduce::barrett_reduce(s.0[i]), reduce::barrett_reduce(2 * x.0[i]));
            let want = (-2 * y.0[i] as i32).rem_euclid(crate::Q as i32);
            assert_eq!(reduce::caddq(reduce::barrett_reduce(d.0[i])) as i32, want);
        }
    }
}
