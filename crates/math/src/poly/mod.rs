mod ntt_poly;
mod polynomial;
mod polyvec;

pub use ntt_poly::NttPolynomial;
pub use polynomial::Polynomial;
pub use polyvec::{NttMatrix, NttVector, Vector};

/// Domain-independent coefficient passes shared by both polynomial types.
macro_rules! coefficient_ops {
    ($ty:ident) => {
        impl $ty {
            #[inline]
            #[must_use]
            pub const fn zero() -> Self {
                Self([0i16; $crate::N])
            }

            /// Copy `N` coefficients out of a slice.
            pub fn try_from_slice(coeffs: &[i16]) -> Result<Self, $crate::Error> {
                let coeffs: [i16; $crate::N] =
                    coeffs
                        .try_into()
                        .map_err(|_| $crate::Error::InvalidLength {
                            expected: $crate::N,
                            actual: coeffs.len(),
                        })?;
                Ok(Self(coeffs))
            }

            /// `c := barrett(c)`.
            #[inline]
            pub fn reduce(&mut self) {
                $crate::simd::reduce::<$crate::simd::WideLanes>(&mut self.0);
            }

            /// `c := barrett(c + a)`.
            #[inline]
            pub fn add_reduce(&mut self, a: &Self) {
                $crate::simd::add_reduce::<$crate::simd::WideLanes>(&mut self.0, &a.0);
            }

            /// `c := barrett(c + a + b)`.
            #[inline]
            pub fn add_add_reduce(&mut self, a: &Self, b: &Self) {
                $crate::simd::add_add_reduce::<$crate::simd::WideLanes>(&mut self.0, &a.0, &b.0);
            }

            /// `c := barrett(c - a)`.
            #[inline]
            pub fn sub_reduce(&mut self, a: &Self) {
                $crate::simd::sub_reduce::<$crate::simd::WideLanes>(&mut self.0, &a.0);
            }

            #[must_use]
            pub const fn coeffs(&self) -> &[i16; $crate::N] {
                &self.0
            }

            #[must_use]
            pub const fn coeffs_mut(&mut self) -> &mut [i16; $crate::N] {
                &mut self.0
            }
        }

        impl From<[i16; $crate::N]> for $ty {
            #[inline]
            fn from(coeffs: [i16; $crate::N]) -> Self {
                Self(coeffs)
            }
        }

        impl Default for $ty {
            #[inline]
            fn default() -> Self {
                Self::zero()
            }
        }

        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("coeffs[..4]", &&self.0[..4])
                    .finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use coefficient_ops;
