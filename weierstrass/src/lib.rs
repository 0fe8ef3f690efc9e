//! Group arithmetic on short Weierstrass curves over prime fields.
//!
//! This crate provides affine curve points with the point at infinity, the
//! group law (negation, doubling, addition) and scalar multiplication. The
//! secp256k1 parameters are built in; other curves can be loaded from
//! [`CurveParams`].
//!
//! ```
//! use weierstrass::Group;
//!
//! let group = Group::secp256k1();
//! let g = group.generator();
//! let two_g = g.multiply_by_scalar(&2u32).unwrap();
//!
//! assert!(!two_g.is_infinity());
//! assert_eq!(two_g, g.double().unwrap());
//! assert_eq!(group.infinity_point().to_string(), "secp256k1, infinity");
//! ```

mod error;
mod field;
mod group;
mod params;
mod point;
mod scalar;

#[cfg(test)]
mod test_curves;

pub use error::CurveError;
pub use field::PrimeField;
pub use group::Group;
pub use params::{parse_hex, CurveParams};
pub use point::Point;
pub use scalar::Scalar;
