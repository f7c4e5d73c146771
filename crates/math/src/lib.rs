//! Polynomial-ring arithmetic core for Kyber / ML-KEM.
//!
//! `no_std`, zero-allocation arithmetic over `Z_q[X]/(X^{256}+1)`, `q = 3329`:
//! Montgomery and Barrett reduction, a merged-layer forward/inverse
//! Number-Theoretic Transform, fused reduce/add/sub passes and the NTT-domain
//! multiply-accumulate used by matrix-vector products.
//!
//! Every kernel is written once against the [`simd::Lanes`] batch
//! abstraction. The portable [`simd::Scalar`] backend is always available;
//! the `simd` feature (nightly) swaps in `core::simd` vectors at build time.

#![no_std]
#![cfg_attr(feature = "simd", feature(portable_simd))]
#![deny(unsafe_code)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

pub mod noise;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod reduce;
pub mod self_test;
pub mod simd;
pub mod zetas;

pub use noise::{CbdSampler, CenteredBinomial, Eta2, Eta3, NoiseWidth, Prf};
pub use params::{MlKem512, MlKem768, MlKem1024, ParameterSet};
pub use poly::{NttMatrix, NttPolynomial, NttVector, Polynomial, Vector};

/// Polynomial ring degree.
pub const N: usize = 256;

/// Field modulus.
pub const Q: i16 = 3329;

/// Size in bytes of seeds fed to the noise PRF.
pub const SYMBYTES: usize = 32;

/// Errors raised at the edges of the crate. The arithmetic itself is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input slice has the wrong number of coefficients.
    InvalidLength {
        /// Expected coefficient count.
        expected: usize,
        /// Actual coefficient count received.
        actual: usize,
    },
    /// A known-answer check in [`self_test::run`] produced the wrong value.
    SelfTest {
        /// Name of the failing check.
        check: &'static str,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Self::SelfTest { check } => write!(f, "self-test failed: {check}"),
        }
    }
}

impl core::error::Error for Error {}
