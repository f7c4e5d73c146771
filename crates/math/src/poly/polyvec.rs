use super::{NttPolynomial, Polynomial};
use crate::{
    N,
    simd::{self, WideLanes},
};

/// A vector of `K` polynomials in standard (coefficient) form.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize))]
pub struct Vector<const K: usize> {
    pub(crate) polys: [Polynomial; K],
}

/// A vector of `K` polynomials in NTT domain.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize))]
pub struct NttVector<const K: usize> {
    pub(crate) polys: [NttPolynomial; K],
}

/// Module ranks the accumulate kernel is sized for.
const fn check_rank(k: usize) {
    assert!(2 <= k && k <= 4, "module rank must be 2, 3 or 4");
}

impl<const K: usize> Vector<K> {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        const { check_rank(K) }
        Self {
            polys: [Polynomial::zero(); K],
        }
    }

    /// Forward NTT plus one Barrett pass on every element.
    #[must_use]
    pub fn ntt(self) -> NttVector<K> {
        NttVector {
            polys: self.polys.map(Polynomial::ntt),
        }
    }

    pub fn reduce(&mut self) {
        for p in &mut self.polys {
            p.reduce();
        }
    }

    /// Element-wise `c := barrett(c + a)`.
    pub fn add_reduce(&mut self, a: &Self) {
        for (c, a) in self.polys.iter_mut().zip(&a.polys) {
            c.add_reduce(a);
        }
    }

    #[must_use]
    pub const fn polys(&self) -> &[Polynomial; K] {
        &self.polys
    }

    #[must_use]
    pub const fn polys_mut(&mut self) -> &mut [Polynomial; K] {
        &mut self.polys
    }
}

impl<const K: usize> NttVector<K> {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        const { check_rank(K) }
        Self {
            polys: [NttPolynomial::zero(); K],
        }
    }

    /// Inverse NTT on every element; results carry a factor `R`.
    #[must_use]
    pub fn inv_ntt_to_mont(self) -> Vector<K> {
        Vector {
            polys: self.polys.map(NttPolynomial::inv_ntt_to_mont),
        }
    }

    pub fn reduce(&mut self) {
        for p in &mut self.polys {
            p.reduce();
        }
    }

    /// Element-wise `c := barrett(c + a)`.
    pub fn add_reduce(&mut self, a: &Self) {
        for (c, a) in self.polys.iter_mut().zip(&a.polys) {
            c.add_reduce(a);
        }
    }

    /// `out := Σ_i a[i]∘b[i] * R^{-1}`, Barrett-reduced once.
    ///
    /// With `to_mont` the reduced sum is multiplied by `R`, matching the
    /// scaling of freshly inverse-transformed values.
    pub fn acc_montgomery(out: &mut NttPolynomial, a: &Self, b: &Self, to_mont: bool) {
        const { check_rank(K) }
        let a: [&[i16; N]; K] = core::array::from_fn(|i| &a.polys[i].0);
        let b: [&[i16; N]; K] = core::array::from_fn(|i| &b.polys[i].0);
        out.0 = simd::basemul_acc::<WideLanes>(&a, &b, to_mont);
    }

    /// `Σ_i self[i]∘other[i] * R^{-1}` in NTT domain, reduced.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> NttPolynomial {
        let mut acc = NttPolynomial::zero();
        Self::acc_montgomery(&mut acc, self, other, false);
        acc
    }

    #[must_use]
    pub const fn polys(&self) -> &[NttPolynomial; K] {
        &self.polys
    }

    #[must_use]
    pub const fn polys_mut(&mut self) -> &mut [NttPolynomial; K] {
        &mut self.polys
    }
}

impl<const K: usize> From<[Polynomial; K]> for Vector<K> {
    fn from(polys: [Polynomial; K]) -> Self {
        const { check_rank(K) }
        Self { polys }
    }
}

impl<const K: usize> From<[NttPolynomial; K]> for NttVector<K> {
    fn from(polys: [NttPolynomial; K]) -> Self {
        const { check_rank(K) }
        Self { polys }
    }
}

impl<const K: usize> Default for Vector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const K: usize> Default for NttVector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

/// K x K matrix of NTT-domain polynomials (public matrix A).
#[derive(Clone, Debug)]
pub struct NttMatrix<const K: usize> {
    pub(crate) rows: [NttVector<K>; K],
}

impl<const K: usize> NttMatrix<K> {
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            rows: core::array::from_fn(|_| NttVector::zero()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [NttVector<K>; K]) -> Self {
        Self { rows }
    }

    /// `A * v` with Montgomery conversion on each result row.
    #[must_use]
    pub fn mul_vec_tomont(&self, v: &NttVector<K>) -> NttVector<K> {
        let mut result = NttVector::zero();
        for (r_poly, a_row) in result.polys.iter_mut().zip(self.rows.iter()) {
            NttVector::acc_montgomery(r_poly, a_row, v, true);
        }
        result
    }

    /// `A * v` without Montgomery conversion.
    #[must_use]
    pub fn mul_vec(&self, v: &NttVector<K>) -> NttVector<K> {
        let mut result = NttVector::zero();
        for (r_poly, a_row) in result.polys.iter_mut().zip(self.rows.iter()) {
            *r_poly = a_row.inner_product(v);
        }
        result
    }

    #[must_use]
    pub const fn rows(&self) -> &[NttVector<K>; K] {
        &self.rows
    }

    #[must_use]
    pub const fn rows_mut(&mut self) -> &mut [NttVector<K>; K] {
        &mut self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Q,
        reduce::{barrett_reduce, caddq, fqmul},
    };

    fn canonical(c: i16) -> i16 {
        caddq(barrett_reduce(c))
    }

    fn unit(k: usize) -> NttVector<3> {
        // the NTT-domain constant 1 in slot k
        let mut v = NttVector::<3>::zero();
        v.polys[k] = NttPolynomial::from(core::array::from_fn(|i| i16::from(i % 2 == 0)));
        v
    }

    #[test]
    fn acc_selects_with_unit_vector() {
        let mut a = NttVector::<3>::zero();
        for (k, p) in a.polys.iter_mut().enumerate() {
            *p = NttPolynomial::from(core::array::from_fn(|i| ((i * (k + 2)) % 3000) as i16));
        }
        for k in 0..3 {
            let mut out = NttPolynomial::zero();
            NttVector::acc_montgomery(&mut out, &a, &unit(k), true);
            for (got, want) in out.coeffs().iter().zip(a.polys[k].coeffs()) {
                assert_eq!(canonical(*got), canonical(*want));
            }
        }
    }

    #[test]
    fn tomont_equals_inner_product_then_to_mont() {
        let rows: [NttVector<2>; 2] = core::array::from_fn(|r| {
            NttVector::from(core::array::from_fn(|c| {
                NttPolynomial::from(core::array::from_fn(|i| {
                    ((i * 7 + 100 * r + 37 * c) % 3000) as i16 - 1500
                }))
            }))
        });
        let m = NttMatrix::from_rows(rows);
        let v = m.rows()[1].clone();

        let plain = m.mul_vec(&v);
        let mont = m.mul_vec_tomont(&v);
        for (p, q) in plain.polys().iter().zip(mont.polys()) {
            let mut p = *p;
            p.to_mont();
            assert_eq!(p, *q);
        }
    }

    #[test]
    fn vector_round_trip_and_add() {
        let polys: [Polynomial; 4] = core::array::from_fn(|k| {
            Polynomial::from(core::array::from_fn(|i| ((i + k) % 17) as i16))
        });
        let v = Vector::from(polys);
        let back = v.clone().ntt().inv_ntt_to_mont();
        for (got, want) in back.polys().iter().zip(v.polys()) {
            for (g, w) in got.coeffs().iter().zip(want.coeffs()) {
                assert_eq!(canonical(fqmul(*g, 1)), *w);
            }
        }

        let mut sum = v.clone();
        sum.add_reduce(&v);
        for (s, p) in sum.polys().iter().zip(v.polys()) {
            assert!(s.coeffs().iter().zip(p.coeffs()).all(|(s, p)| *s == 2 * p));
        }
        assert!(sum.polys()[0].coeffs().iter().all(|c| c.abs() < Q));
    }
}
