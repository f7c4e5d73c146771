//! Known-answer checks for the arithmetic core.
//!
//! [`run`] exercises the generated twiddle tables, a full transform round
//! trip and the negacyclic wrap through the accumulate kernel. A caller that
//! links this crate into a larger module can run it once at start-up and
//! refuse service on failure.
//!
//! With the `tracing` feature every check is logged at `debug`, failures at
//! `error`.

use crate::{
    Error, N, NttPolynomial, NttVector, Polynomial, Q,
    reduce::{MONT, caddq, fqmul},
    zetas::{FORWARD_TOP, FORWARD_ZETAS, INVERSE_TOP, INVERSE_ZETAS, ZETAS},
};

/// `2^{16} mod q`: what the all-ones round trip must produce.
const R_MOD_Q: i16 = 2285;

/// `R^{-1} mod q`.
const R_INV_MOD_Q: i16 = 169;

fn check(name: &'static str, ok: bool) -> Result<(), Error> {
    if ok {
        #[cfg(feature = "tracing")]
        tracing::debug!(check = name, "self-test check passed");
        Ok(())
    } else {
        #[cfg(feature = "tracing")]
        tracing::error!(check = name, "self-test check failed");
        Err(Error::SelfTest { check: name })
    }
}

/// Run every known-answer check, stopping at the first failure.
///
/// # Errors
/// Returns [`Error::SelfTest`] naming the first check that produced a wrong
/// value.
pub fn run() -> Result<(), Error> {
    check("montgomery boundary", kat_fqmul_boundary())?;
    check("zeta tables", kat_tables())?;
    check("ntt round trip", kat_round_trip())?;
    check("negacyclic wrap", kat_negacyclic_wrap())?;
    #[cfg(feature = "tracing")]
    tracing::info!("arithmetic self-test passed");
    Ok(())
}

fn kat_fqmul_boundary() -> bool {
    // (q-1)^2 = 1 (mod q), so both products are R^{-1}
    let m = Q - 1;
    caddq(fqmul(m, m)) == R_INV_MOD_Q && caddq(fqmul(-m, -m)) == R_INV_MOD_Q
}

fn kat_tables() -> bool {
    ZETAS[0] == MONT
        && FORWARD_ZETAS[0] == -359
        && FORWARD_ZETAS[FORWARD_TOP] == ZETAS[1]
        && INVERSE_ZETAS[0] == 1628
        && INVERSE_ZETAS[INVERSE_TOP] == 1397
}

fn kat_round_trip() -> bool {
    let back = Polynomial::from([1i16; N]).ntt().inv_ntt_to_mont();
    back.coeffs().iter().all(|&c| caddq(c) == R_MOD_Q)
}

fn kat_negacyclic_wrap() -> bool {
    // x * x^255 = x^256 = -1
    let mut x = [0i16; N];
    x[1] = 1;
    let mut x255 = [0i16; N];
    x255[N - 1] = 1;

    let a = NttVector::from([Polynomial::from(x).ntt(), NttPolynomial::zero()]);
    let b = NttVector::from([Polynomial::from(x255).ntt(), NttPolynomial::zero()]);
    let mut prod = NttPolynomial::zero();
    NttVector::acc_montgomery(&mut prod, &a, &b, false);

    let prod = prod.inv_ntt_to_mont();
    let c = prod.coeffs();
    caddq(c[0]) == Q - 1 && c[1..].iter().all(|&c| caddq(c) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_test_passes() {
        assert_eq!(run(), Ok(()));
    }

    #[test]
    fn individual_checks_pass() {
        assert!(kat_fqmul_boundary());
        assert!(kat_tables());
        assert!(kat_round_trip());
        assert!(kat_negacyclic_wrap());
    }

    #[test]
    fn failures_name_the_check() {
        assert_eq!(
            check("probe", false),
            Err(Error::SelfTest { check: "probe" })
        );
    }
}
