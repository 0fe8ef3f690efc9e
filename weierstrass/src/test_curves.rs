//! Small curves for exhaustive checks.

use num_bigint::BigUint;

use crate::{CurveParams, Group};

/// y^2 = x^3 + 2x + 3 over GF(97), generator (3, 6) of order 5.
pub fn f97_params() -> CurveParams {
    CurveParams {
        name: "f97".to_string(),
        p: BigUint::from(97u32),
        a: BigUint::from(2u32),
        b: BigUint::from(3u32),
        gx: BigUint::from(3u32),
        gy: BigUint::from(6u32),
        order: BigUint::from(5u32),
    }
}

pub fn f97() -> Group {
    Group::new(f97_params()).unwrap()
}

/// y^2 = x^3 + 7 over GF(17), generator (6, 6). The full group has 18
/// elements and contains the 2-torsion point (3, 0).
pub fn f17_with_order(order: u32) -> Group {
    Group::new(CurveParams {
        name: "f17".to_string(),
        p: BigUint::from(17u32),
        a: BigUint::from(0u32),
        b: BigUint::from(7u32),
        gx: BigUint::from(6u32),
        gy: BigUint::from(6u32),
        order: BigUint::from(order),
    })
    .unwrap()
}

pub fn f17() -> Group {
    f17_with_order(18)
}
