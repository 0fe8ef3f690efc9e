use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CurveError, CurveParams, Point, PrimeField};

static SECP256K1: OnceLock<Group> = OnceLock::new();

/// A short Weierstrass curve `y^2 = x^3 + a*x + b` over `GF(p)` together
/// with a generator and the order of the subgroup it spans.
///
/// A `Group` is immutable once built. Points borrow it, so a group must
/// outlive every point derived from it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Group {
    name: String,
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    order: BigUint,
}

impl Group {
    /// Validate `params` and build the group.
    ///
    /// Fails with [`CurveError::InvalidCurveParameters`] if the modulus is
    /// too small, a coefficient or generator coordinate is not reduced,
    /// the curve is singular, the order is zero or the generator is not
    /// on the curve.
    pub fn new(params: CurveParams) -> Result<Self, CurveError> {
        Self::from_params(params)
            .inspect(|group| {
                tracing::debug!(
                    name = %group.name,
                    bits = group.bit_length(),
                    "constructed curve group"
                )
            })
            .inspect_err(|err| tracing::warn!(%err, "rejected curve parameters"))
    }

    fn from_params(params: CurveParams) -> Result<Self, CurveError> {
        let CurveParams {
            name,
            p,
            a,
            b,
            gx,
            gy,
            order,
        } = params;
        let label = name.clone();
        let invalid =
            move |reason: &str| CurveError::InvalidCurveParameters(format!("{label}: {reason}"));

        let field = PrimeField::new(p)?;
        for (label, value) in [("a", &a), ("b", &b), ("generator x", &gx), ("generator y", &gy)] {
            if !field.contains(value) {
                return Err(invalid(&format!("{label} is not reduced modulo p")));
            }
        }
        if order.is_zero() {
            return Err(invalid("order must be positive"));
        }

        // 4a^3 + 27b^2 == 0 means the curve has a cusp or a node.
        let four_a3 = field.mul(&BigUint::from(4u32), &field.mul(&a, &field.square(&a)));
        let twenty_seven_b2 = field.mul(&BigUint::from(27u32), &field.square(&b));
        if field.add(&four_a3, &twenty_seven_b2).is_zero() {
            return Err(invalid("curve is singular"));
        }

        let group = Group {
            name,
            field,
            a,
            b,
            gx,
            gy,
            order,
        };
        if !group.contains(&group.gx, &group.gy) {
            return Err(invalid("generator is not on the curve"));
        }
        Ok(group)
    }

    /// The process-wide secp256k1 group.
    pub fn secp256k1() -> &'static Group {
        SECP256K1.get_or_init(|| {
            let CurveParams {
                name,
                p,
                a,
                b,
                gx,
                gy,
                order,
            } = CurveParams::secp256k1();
            Group {
                name,
                field: PrimeField::new_unchecked(p),
                a,
                b,
                gx,
                gy,
                order,
            }
        })
    }

    /// The parameters this group was built from.
    pub fn params(&self) -> CurveParams {
        CurveParams {
            name: self.name.clone(),
            p: self.field.modulus().clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            gx: self.gx.clone(),
            gy: self.gy.clone(),
            order: self.order.clone(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order of the generator.
    #[inline]
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Number of bits in the field modulus.
    pub fn bit_length(&self) -> u64 {
        self.field.modulus().bits()
    }

    /// Number of bytes needed to hold a field element.
    pub fn byte_length(&self) -> u64 {
        self.bit_length().div_ceil(8)
    }

    /// Check that `(x, y)` is canonical and satisfies y^2 = x^3 + a*x + b.
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let field = &self.field;
        if !field.contains(x) || !field.contains(y) {
            return false;
        }

        let lhs = field.square(y);
        let x3 = field.mul(x, &field.square(x));
        let ax = field.mul(&self.a, x);
        let rhs = field.add(&field.add(&x3, &ax), &self.b);

        lhs == rhs
    }

    /// The identity element.
    pub fn infinity_point(&self) -> Point<'_> {
        Point::infinity(self)
    }

    /// The base point.
    pub fn generator(&self) -> Point<'_> {
        Point::finite(self, self.gx.clone(), self.gy.clone())
    }

    /// Build a finite point, checking that it lies on the curve.
    pub fn make_point(&self, x: BigUint, y: BigUint) -> Result<Point<'_>, CurveError> {
        if !self.contains(&x, &y) {
            return Err(CurveError::PointNotOnCurve);
        }
        Ok(Point::finite(self, x, y))
    }

    /// A point of this group that is finite and on the curve. Does not
    /// check the subgroup order.
    pub fn is_partially_valid_public_key(&self, point: &Point<'_>) -> bool {
        if !point.belongs_to(self) {
            return false;
        }
        match point.coords() {
            (Some(x), Some(y)) => self.contains(x, y),
            _ => false,
        }
    }

    /// A partially valid point whose order divides the group order.
    pub fn is_valid_public_key(&self, point: &Point<'_>) -> bool {
        self.is_partially_valid_public_key(point)
            && point
                .multiply_by_scalar(&self.order)
                .is_ok_and(|product| product.is_infinity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_curves;

    #[test]
    fn test_secp256k1_preset_is_valid() {
        let built = Group::new(CurveParams::secp256k1()).unwrap();
        assert_eq!(&built, Group::secp256k1());
        assert!(std::ptr::eq(Group::secp256k1(), Group::secp256k1()));
    }

    #[test]
    fn test_lengths() {
        let group = Group::secp256k1();
        assert_eq!(group.bit_length(), 256);
        assert_eq!(group.byte_length(), 32);
        assert_eq!(test_curves::f97().bit_length(), 7);
        assert_eq!(test_curves::f97().byte_length(), 1);
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        let mut params = CurveParams::secp256k1();
        params.gy += 1u32;
        assert!(matches!(
            Group::new(params),
            Err(CurveError::InvalidCurveParameters(_))
        ));
    }

    #[test]
    fn test_rejects_unreduced_parameters() {
        let mut params = test_curves::f97_params();
        params.b = BigUint::from(100u32);
        assert!(matches!(
            Group::new(params),
            Err(CurveError::InvalidCurveParameters(_))
        ));

        let mut params = test_curves::f97_params();
        params.gx = BigUint::from(97u32 + 3);
        assert!(matches!(
            Group::new(params),
            Err(CurveError::InvalidCurveParameters(_))
        ));
    }

    #[test]
    fn test_rejects_singular_curve() {
        // y^2 = x^3 has a cusp at the origin; (1, 1) is on it.
        let params = CurveParams {
            name: "cusp".to_string(),
            p: BigUint::from(97u32),
            a: BigUint::zero(),
            b: BigUint::zero(),
            gx: BigUint::from(1u32),
            gy: BigUint::from(1u32),
            order: BigUint::from(97u32),
        };
        assert!(matches!(
            Group::new(params),
            Err(CurveError::InvalidCurveParameters(_))
        ));
    }

    #[test]
    fn test_rejects_zero_order_and_small_modulus() {
        let mut params = test_curves::f97_params();
        params.order = BigUint::zero();
        assert!(Group::new(params).is_err());

        let mut params = test_curves::f97_params();
        params.p = BigUint::from(2u32);
        assert!(Group::new(params).is_err());
    }

    #[test]
    fn test_make_point() {
        let group = test_curves::f97();
        let point = group
            .make_point(BigUint::from(80u32), BigUint::from(10u32))
            .unwrap();
        assert_eq!(point.x(), Some(&BigUint::from(80u32)));

        assert_eq!(
            group.make_point(BigUint::from(80u32), BigUint::from(11u32)),
            Err(CurveError::PointNotOnCurve)
        );
        // (3 + 97, 6) reduces onto the curve but is not canonical.
        assert_eq!(
            group.make_point(BigUint::from(100u32), BigUint::from(6u32)),
            Err(CurveError::PointNotOnCurve)
        );
        // Same for y: (3, 6 + 97).
        assert_eq!(
            group.make_point(BigUint::from(3u32), BigUint::from(6u32 + 97)),
            Err(CurveError::PointNotOnCurve)
        );

        let secp = Group::secp256k1();
        let (gx, gy) = match secp.generator().coords() {
            (Some(x), Some(y)) => (x.clone(), y.clone()),
            _ => unreachable!(),
        };
        let p = secp.field().modulus().clone();
        assert_eq!(
            secp.make_point(gx.clone(), &gy + &p),
            Err(CurveError::PointNotOnCurve)
        );
        assert_eq!(
            secp.make_point(&gx + &p, gy.clone()),
            Err(CurveError::PointNotOnCurve)
        );
        assert_eq!(secp.make_point(gx, gy).unwrap(), secp.generator());
    }

    #[test]
    fn test_equality_covers_all_parameters() {
        let mut params = test_curves::f97_params();
        params.name = "renamed".to_string();
        let renamed = Group::new(params).unwrap();
        assert_ne!(renamed, test_curves::f97());
        assert_eq!(test_curves::f97(), test_curves::f97());
    }

    #[test]
    fn test_params_round_trip() {
        let group = Group::secp256k1();
        let json = serde_json::to_string(&group.params()).unwrap();
        let params: CurveParams = serde_json::from_str(&json).unwrap();
        assert_eq!(&Group::new(params).unwrap(), group);
    }

    #[test]
    fn test_public_key_validation() {
        let group = Group::secp256k1();
        let g = group.generator();
        assert!(group.is_partially_valid_public_key(&g));
        assert!(group.is_valid_public_key(&g));
        assert!(!group.is_valid_public_key(&group.infinity_point()));

        // (6, 6) generates the whole order-18 group, so 9*(6, 6) = (3, 0)
        // has order 2 and is rejected against a claimed order of 9.
        let small = test_curves::f17_with_order(9);
        let point = small
            .make_point(BigUint::from(3u32), BigUint::from(0u32))
            .unwrap();
        assert!(small.is_partially_valid_public_key(&point));
        assert!(!small.is_valid_public_key(&point));

        // Points from another group are never valid keys.
        assert!(!group.is_partially_valid_public_key(&small.generator()));
    }
}
