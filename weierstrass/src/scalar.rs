//! Scalar multiplication.
//!
//! Scalars are anything implementing [`Scalar`]. Integer types can only be
//! rejected for being negative; the floating-point impls also reject
//! fractional and non-finite values with [`CurveError::ScalarNotInteger`].

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Signed, Zero};

use crate::{CurveError, Group, Point};

/// A value usable as the multiplier in `k * P`.
pub trait Scalar {
    /// The non-negative integer value of the scalar.
    fn to_magnitude(&self) -> Result<BigUint, CurveError>;
}

impl Scalar for BigUint {
    #[inline]
    fn to_magnitude(&self) -> Result<BigUint, CurveError> {
        Ok(self.clone())
    }
}

impl Scalar for BigInt {
    fn to_magnitude(&self) -> Result<BigUint, CurveError> {
        if self.is_negative() {
            return Err(CurveError::ScalarNegative);
        }
        Ok(self.magnitude().clone())
    }
}

macro_rules! impl_unsigned_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_magnitude(&self) -> Result<BigUint, CurveError> {
                    Ok(BigUint::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_signed_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_magnitude(&self) -> Result<BigUint, CurveError> {
                    if *self < 0 {
                        return Err(CurveError::ScalarNegative);
                    }
                    Ok(BigUint::from(self.unsigned_abs()))
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn to_magnitude(&self) -> Result<BigUint, CurveError> {
                    if !self.is_finite() || self.fract() != 0.0 {
                        return Err(CurveError::ScalarNotInteger);
                    }
                    if *self < 0.0 {
                        return Err(CurveError::ScalarNegative);
                    }
                    BigUint::from_f64(f64::from(*self)).ok_or(CurveError::ScalarNotInteger)
                }
            }
        )*
    };
}

impl_unsigned_scalar!(u8, u16, u32, u64, u128, usize);
impl_signed_scalar!(i8, i16, i32, i64, i128, isize);
impl_float_scalar!(f32, f64);

impl<'g> Point<'g> {
    /// Compute `k * self` by double-and-add.
    ///
    /// Bits of `k` are consumed from the most significant down: the
    /// accumulator is doubled once per bit and `self` is added when the bit
    /// is set. Validation of `k` happens before any arithmetic.
    #[tracing::instrument(skip_all, level = "trace")]
    pub fn multiply_by_scalar<S: Scalar + ?Sized>(
        &self,
        scalar: &S,
    ) -> Result<Point<'g>, CurveError> {
        let k = scalar.to_magnitude()?;
        let mut result = Point::infinity(self.group());

        for bit in (0..k.bits()).rev() {
            result = result.double()?;
            if k.bit(bit) {
                result = result.add_to_point(self)?;
            }
        }

        Ok(result)
    }

    /// Same result as [`Point::multiply_by_scalar`], using a fixed 4-bit
    /// window over a table of `0..16` multiples.
    pub fn multiply_by_scalar_windowed<S: Scalar + ?Sized>(
        &self,
        scalar: &S,
    ) -> Result<Point<'g>, CurveError> {
        let k = scalar.to_magnitude()?;
        let infinity = Point::infinity(self.group());
        if k.is_zero() || self.is_infinity() {
            return Ok(infinity);
        }

        let mut table = Vec::with_capacity(16);
        table.push(infinity.clone());
        table.push(self.clone());
        for i in 2..16 {
            let entry = if i % 2 == 0 {
                table[i / 2].double()?
            } else {
                table[i - 1].add_to_point(self)?
            };
            table.push(entry);
        }

        let mut result = infinity;
        for window_index in (0..k.bits().div_ceil(4)).rev() {
            for _ in 0..4 {
                result = result.double()?;
            }

            let window = (0..4).fold(0usize, |acc, offset| {
                acc | (usize::from(k.bit(window_index * 4 + offset)) << offset)
            });
            if window != 0 {
                result = result.add_to_point(&table[window])?;
            }
        }

        Ok(result)
    }
}

impl Group {
    /// `k * G` for the generator `G`.
    pub fn mul_generator<S: Scalar + ?Sized>(&self, scalar: &S) -> Result<Point<'_>, CurveError> {
        self.generator().multiply_by_scalar(scalar)
    }

    /// Sum of `scalars[i] * points[i]`.
    ///
    /// Every point must belong to this group.
    #[tracing::instrument(skip_all, level = "trace", fields(len = points.len()))]
    pub fn multi_scalar_mul<'g, S: Scalar>(
        &'g self,
        points: &[Point<'g>],
        scalars: &[S],
    ) -> Result<Point<'g>, CurveError> {
        if points.len() != scalars.len() {
            return Err(CurveError::InvalidInputLengths(points.len(), scalars.len()));
        }

        let mut result = self.infinity_point();
        for (point, scalar) in points.iter().zip(scalars) {
            if !point.belongs_to(self) {
                return Err(CurveError::GroupMismatch);
            }
            result = result.add_to_point(&point.multiply_by_scalar(scalar)?)?;
        }
        Ok(result)
    }
}
