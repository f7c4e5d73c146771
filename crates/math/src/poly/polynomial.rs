use super::{NttPolynomial, coefficient_ops};
use crate::{
    N, SYMBYTES,
    noise::{CbdSampler, MAX_NOISE_BYTES, NoiseWidth, Prf},
    ntt,
    params::ParameterSet,
};

/// Polynomial in standard (coefficient) form over `R_q = Z_q[X]/(X^{256}+1)`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize))]
pub struct Polynomial(pub(crate) [i16; N]);

coefficient_ops!(Polynomial);

impl Polynomial {
    /// Consuming forward NTT followed by one Barrett pass.
    ///
    /// Coefficients must satisfy `|c| < q`.
    #[must_use]
    pub fn ntt(mut self) -> NttPolynomial {
        ntt::forward_ntt(&mut self.0);
        let mut p = NttPolynomial(self.0);
        p.reduce();
        p
    }

    /// One noise polynomial from `W::BUF_BYTES` bytes of `prf(seed, nonce)`.
    #[must_use]
    pub fn getnoise<W: NoiseWidth>(
        prf: &impl Prf,
        sampler: &impl CbdSampler,
        seed: &[u8; SYMBYTES],
        nonce: u8,
    ) -> Self {
        let mut buf = [0u8; MAX_NOISE_BYTES];
        let buf = &mut buf[..W::BUF_BYTES];
        prf.fill(seed, nonce, buf);

        let mut p = Self::zero();
        sampler.sample::<W>(&mut p.0, buf);
        #[cfg(feature = "zeroize")]
        zeroize::Zeroize::zeroize(buf);
        p
    }

    /// Two noise polynomials from one two-stream PRF call.
    #[must_use]
    pub fn getnoise_x2<W: NoiseWidth>(
        prf: &impl Prf,
        sampler: &impl CbdSampler,
        seed: &[u8; SYMBYTES],
        nonces: [u8; 2],
    ) -> [Self; 2] {
        let mut buf0 = [0u8; MAX_NOISE_BYTES];
        let mut buf1 = [0u8; MAX_NOISE_BYTES];
        let (buf0, buf1) = (&mut buf0[..W::BUF_BYTES], &mut buf1[..W::BUF_BYTES]);
        prf.fill_x2(seed, nonces, [&mut *buf0, &mut *buf1]);

        let mut out = [Self::zero(); 2];
        sampler.sample::<W>(&mut out[0].0, buf0);
        sampler.sample::<W>(&mut out[1].0, buf1);
        #[cfg(feature = "zeroize")]
        {
            zeroize::Zeroize::zeroize(buf0);
            zeroize::Zeroize::zeroize(buf1);
        }
        out
    }

    /// Two `η1` noise polynomials for parameter set `P`.
    #[must_use]
    pub fn getnoise_eta1_x2<P: ParameterSet>(
        prf: &impl Prf,
        sampler: &impl CbdSampler,
        seed: &[u8; SYMBYTES],
        nonces: [u8; 2],
    ) -> [Self; 2] {
        Self::getnoise_x2::<P::Noise1>(prf, sampler, seed, nonces)
    }

    /// Two `η2` noise polynomials for parameter set `P`.
    #[must_use]
    pub fn getnoise_eta2_x2<P: ParameterSet>(
        prf: &impl Prf,
        sampler: &impl CbdSampler,
        seed: &[u8; SYMBYTES],
        nonces: [u8; 2],
    ) -> [Self; 2] {
        Self::getnoise_x2::<P::Noise2>(prf, sampler, seed, nonces)
    }

    /// One `η2` noise polynomial for parameter set `P`.
    #[must_use]
    pub fn getnoise_eta2<P: ParameterSet>(
        prf: &impl Prf,
        sampler: &impl CbdSampler,
        seed: &[u8; SYMBYTES],
        nonce: u8,
    ) -> Self {
        Self::getnoise::<P::Noise2>(prf, sampler, seed, nonce)
    }
}
