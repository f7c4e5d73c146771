//! Noise collaborators: the keyed PRF and the centered-binomial sampler.
//!
//! The arithmetic core only consumes these through traits. [`Prf`] expands a
//! `(seed, nonce)` pair into a byte stream; [`CbdSampler`] turns `η·N/4`
//! such bytes into a polynomial with coefficients in `[-η, η]`.
//! [`CenteredBinomial`] is the stock sampler.

use crate::{N, SYMBYTES};

mod sealed {
    pub trait Sealed {}
}

/// Largest PRF output any width consumes (`η = 3`).
pub const MAX_NOISE_BYTES: usize = 3 * N / 4;

/// Sealed trait for CBD noise sampling width.
pub trait NoiseWidth: sealed::Sealed {
    const ETA: usize;
    /// PRF bytes consumed per polynomial, `ETA * N / 4`.
    const BUF_BYTES: usize;

    /// Bit-sliced CBD over exactly [`Self::BUF_BYTES`] bytes of `buf`.
    fn cbd(r: &mut [i16; N], buf: &[u8]);
}

/// η = 2.
#[derive(Debug, Clone, Copy)]
pub struct Eta2;

/// η = 3.
#[derive(Debug, Clone, Copy)]
pub struct Eta3;

impl sealed::Sealed for Eta2 {}
impl NoiseWidth for Eta2 {
    const ETA: usize = 2;
    const BUF_BYTES: usize = 2 * N / 4;

    #[inline]
    fn cbd(r: &mut [i16; N], buf: &[u8]) {
        debug_assert!(buf.len() >= Self::BUF_BYTES);
        for (out, chunk) in r.chunks_exact_mut(8).zip(buf.chunks_exact(4)) {
            let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
            for (j, c) in out.iter_mut().enumerate() {
                let a = ((d >> (4 * j)) & 3) as i16;
                let b = ((d >> (4 * j + 2)) & 3) as i16;
                *c = a - b;
            }
        }
    }
}

impl sealed::Sealed for Eta3 {}
impl NoiseWidth for Eta3 {
    const ETA: usize = 3;
    const BUF_BYTES: usize = 3 * N / 4;

    #[inline]
    fn cbd(r: &mut [i16; N], buf: &[u8]) {
        debug_assert!(buf.len() >= Self::BUF_BYTES);
        for (out, chunk) in r.chunks_exact_mut(4).zip(buf.chunks_exact(3)) {
            let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], 0]);
            let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
            for (j, c) in out.iter_mut().enumerate() {
                let a = ((d >> (6 * j)) & 7) as i16;
                let b = ((d >> (6 * j + 3)) & 7) as i16;
                *c = a - b;
            }
        }
    }
}

/// Keyed pseudorandom function producing noise seeds.
///
/// `fill` writes `out.len()` bytes derived from `(seed, nonce)`. Backends
/// that can squeeze two streams at once override [`Prf::fill_x2`].
pub trait Prf {
    fn fill(&self, seed: &[u8; SYMBYTES], nonce: u8, out: &mut [u8]);

    /// Two independent streams, one per nonce.
    fn fill_x2(&self, seed: &[u8; SYMBYTES], nonces: [u8; 2], outs: [&mut [u8]; 2]) {
        let [out0, out1] = outs;
        self.fill(seed, nonces[0], out0);
        self.fill(seed, nonces[1], out1);
    }
}

/// Converts PRF output into a noise polynomial.
pub trait CbdSampler {
    /// `buf` holds at least `W::BUF_BYTES` bytes; coefficients land in
    /// `[-W::ETA, W::ETA]`.
    fn sample<W: NoiseWidth>(&self, r: &mut [i16; N], buf: &[u8]);
}

/// Stock centered-binomial sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenteredBinomial;

impl CbdSampler for CenteredBinomial {
    #[inline]
    fn sample<W: NoiseWidth>(&self, r: &mut [i16; N], buf: &[u8]) {
        W::cbd(r, &buf[..W::BUF_BYTES]);
    }
}
