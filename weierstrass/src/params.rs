//! Curve parameters: y^2 = x^3 + a*x + b over GF(p), with a generator of
//! order n.
//!
//! `CurveParams` is the configuration form of a curve. Big integers are
//! written as hex strings when serialized, so a curve can be loaded from
//! JSON or any other serde format and handed to [`crate::Group::new`].

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// secp256k1 constants as little-endian u64 limbs.

// p = 2^256 - 2^32 - 977
const SECP256K1_P: [u64; 4] = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

const SECP256K1_N: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

const SECP256K1_GX: [u64; 4] = [
    0x59f2815b16f81798,
    0x029bfcdb2dce28d9,
    0x55a06295ce870b07,
    0x79be667ef9dcbbac,
];

const SECP256K1_GY: [u64; 4] = [
    0x9c47d08ffb10d4b8,
    0xfd17b448a6855419,
    0x5da4fbfc0e1108a8,
    0x483ada7726a3c465,
];

/// Raw parameters of a short Weierstrass curve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveParams {
    /// Display name, e.g. `secp256k1`
    pub name: String,
    /// Field modulus
    #[serde(with = "hex_biguint")]
    pub p: BigUint,
    #[serde(with = "hex_biguint")]
    pub a: BigUint,
    #[serde(with = "hex_biguint")]
    pub b: BigUint,
    /// Generator x-coordinate
    #[serde(with = "hex_biguint")]
    pub gx: BigUint,
    /// Generator y-coordinate
    #[serde(with = "hex_biguint")]
    pub gy: BigUint,
    /// Order of the subgroup generated by (gx, gy)
    #[serde(with = "hex_biguint")]
    pub order: BigUint,
}

impl CurveParams {
    /// The secp256k1 curve (SEC 2, section 2.4.1).
    pub fn secp256k1() -> Self {
        CurveParams {
            name: "secp256k1".to_string(),
            p: from_limbs(SECP256K1_P),
            a: BigUint::from(0u32),
            b: BigUint::from(7u32),
            gx: from_limbs(SECP256K1_GX),
            gy: from_limbs(SECP256K1_GY),
            order: from_limbs(SECP256K1_N),
        }
    }
}

fn from_limbs(limbs: [u64; 4]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Parse a hex integer with an optional `0x` prefix. Underscores between
/// digits are accepted; signs are not.
pub fn parse_hex(input: &str) -> Option<BigUint> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
}

mod hex_biguint {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid hex integer: {text:?}")))
    }
}
