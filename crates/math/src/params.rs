//! Parameter sets. `ParameterSet` trait and marker types MlKem512, MlKem768,
//! MlKem1024.

use crate::{
    N,
    noise::{Eta2, Eta3, NoiseWidth},
};

/// Rank and noise widths of one parameter set.
pub trait ParameterSet: 'static {
    /// Module rank (k = 2, 3, or 4).
    const K: usize;
    /// CBD noise parameter for secret and error polynomials of key generation.
    const ETA1: usize;
    /// CBD noise parameter for encryption noise polynomials.
    const ETA2: usize;

    /// PRF bytes per `ETA1` noise polynomial (`ETA1 * N / 4`).
    const NOISE1_BYTES: usize;
    /// PRF bytes per `ETA2` noise polynomial (`ETA2 * N / 4`).
    const NOISE2_BYTES: usize;

    /// Sampler width for `ETA1`.
    type Noise1: NoiseWidth;
    /// Sampler width for `ETA2`.
    type Noise2: NoiseWidth;
}

/// ML-KEM-512 parameter set (k = 2, NIST security level 1).
#[derive(Debug, Clone, Copy)]
pub struct MlKem512;

impl ParameterSet for MlKem512 {
    const K: usize = 2;
    const ETA1: usize = 3;
    const ETA2: usize = 2;

    const NOISE1_BYTES: usize = 192; // 3 * 256 / 4
    const NOISE2_BYTES: usize = 128; // 2 * 256 / 4

    type Noise1 = Eta3;
    type Noise2 = Eta2;
}

/// ML-KEM-768 parameter set (k = 3, NIST security level 3).
#[derive(Debug, Clone, Copy)]
pub struct MlKem768;

impl ParameterSet for MlKem768 {
    const K: usize = 3;
    const ETA1: usize = 2;
    const ETA2: usize = 2;

    const NOISE1_BYTES: usize = 128;
    const NOISE2_BYTES: usize = 128;

    type Noise1 = Eta2;
    type Noise2 = Eta2;
}

/// ML-KEM-1024 parameter set (k = 4, NIST security level 5).
#[derive(Debug, Clone, Copy)]
pub struct MlKem1024;

impl ParameterSet for MlKem1024 {
    const K: usize = 4;
    const ETA1: usize = 2;
    const ETA2: usize = 2;

    const NOISE1_BYTES: usize = 128;
    const NOISE2_BYTES: usize = 128;

    type Noise1 = Eta2;
    type Noise2 = Eta2;
}

const _: () = {
    // --- Structural invariants ---
    macro_rules! check_params {
        ($t:ty) => {
            assert!(2 <= <$t>::K && <$t>::K <= 4);
            assert!(<<$t as ParameterSet>::Noise1 as NoiseWidth>::ETA == <$t>::ETA1);
            assert!(<<$t as ParameterSet>::Noise2 as NoiseWidth>::ETA == <$t>::ETA2);
            assert!(<$t>::NOISE1_BYTES == <$t>::ETA1 * N / 4);
            assert!(<$t>::NOISE2_BYTES == <$t>::ETA2 * N / 4);
            assert!(<<$t as ParameterSet>::Noise1 as NoiseWidth>::BUF_BYTES == <$t>::NOISE1_BYTES);
            assert!(<<$t as ParameterSet>::Noise2 as NoiseWidth>::BUF_BYTES == <$t>::NOISE2_BYTES);
        };
    }
    check_params!(MlKem512);
    check_params!(MlKem768);
    check_params!(MlKem1024);
};
