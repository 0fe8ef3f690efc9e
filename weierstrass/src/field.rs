//! Arithmetic modulo a fixed prime.
//!
//! Elements are plain `BigUint` values kept in canonical form `[0, p-1]`.
//! Every method accepts arbitrary inputs and reduces them first, so the
//! results are always canonical.

use crate::CurveError;
use num_bigint::{BigInt, BigUint};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Zero};

/// Prime field `GF(p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create a field with the given modulus. The modulus is assumed to be
    /// prime; only `p > 2` is checked.
    pub fn new(modulus: BigUint) -> Result<Self, CurveError> {
        if modulus <= BigUint::from(2u8) {
            return Err(CurveError::InvalidCurveParameters(format!(
                "field modulus {modulus:#x} must be greater than 2"
            )));
        }
        Ok(PrimeField { modulus })
    }

    /// For moduli already known to be valid (built-in presets).
    pub(crate) fn new_unchecked(modulus: BigUint) -> Self {
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Map any integer, including negative ones, into `[0, p-1]`.
    pub fn canonicalize<T: Into<BigInt>>(&self, value: T) -> BigUint {
        let modulus = BigInt::from(self.modulus.clone());
        // mod_floor takes the sign of the divisor, which is positive here.
        let (_, magnitude) = value.into().mod_floor(&modulus).into_parts();
        magnitude
    }

    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Whether `value` is already a canonical element.
    #[inline]
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            &self.modulus - (b - a)
        }
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce(a);
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn invert(&self, value: &BigUint) -> Result<BigUint, CurveError> {
        let value = self.reduce(value);
        if value.is_zero() {
            tracing::warn!("attempted to invert zero modulo {:#x}", self.modulus);
            return Err(CurveError::DivisionByZero);
        }

        let modulus = BigInt::from(self.modulus.clone());
        let ExtendedGcd { gcd, x, .. } = BigInt::from(value).extended_gcd(&modulus);
        // Only a composite modulus can leave a common factor behind.
        if !gcd.is_one() {
            return Err(CurveError::DivisionByZero);
        }
        Ok(self.canonicalize(x))
    }

    /// `a / b`, failing only when `b` is zero.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint, CurveError> {
        Ok(self.mul(a, &self.invert(b)?))
    }
}
