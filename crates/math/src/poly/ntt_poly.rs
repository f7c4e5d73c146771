use super::{Polynomial, coefficient_ops};
use crate::{
    N, ntt,
    reduce::MONT_SQ,
    simd::{self, WideLanes},
};

/// Polynomial in NTT (bit-reversed) domain.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize))]
pub struct NttPolynomial(pub(crate) [i16; N]);

coefficient_ops!(NttPolynomial);

impl NttPolynomial {
    /// Inverse NTT; every coefficient comes back multiplied by `R`.
    ///
    /// Coefficients must satisfy `|c| < q`, which holds after any of the
    /// reducing passes.
    #[must_use]
    pub fn inv_ntt_to_mont(mut self) -> Polynomial {
        ntt::inverse_ntt(&mut self.0);
        Polynomial(self.0)
    }

    /// Multiply every coefficient by `R` (via `fqmul` with `R^2 mod q`).
    pub fn to_mont(&mut self) {
        simd::mul_scalar_montgomery::<WideLanes>(&mut self.0, MONT_SQ);
    }

    /// Pointwise product in NTT domain, scaled by `R^{-1}`. Unreduced.
    #[must_use]
    pub fn basemul(&self, other: &Self) -> Self {
        Self(simd::basemul::<WideLanes>(&self.0, &other.0))
    }
}
