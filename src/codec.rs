//! Boundary encodings shared with circuit-side implementations.
//!
//! * `bytes32`: 32 big-endian bytes, rendered as `0x` followed by 64 lowercase hex digits.
//! * packed points: the y coordinate as 255 little-endian bits, with the top bit of the last
//!   byte set when `x > (p - 1) / 2`. The packed integer is that 32 byte buffer read as a
//!   little-endian number, so its `bytes32` rendering is the byte-reversed wire form.

use crate::curve::{BabyJubjubConfig, Fq, Point};
use crate::Error;
use ark_ec::twisted_edwards::TECurveConfig;
use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use num_bigint::{BigUint, Sign, ToBigInt};

const SIGN_BIT: u8 = 0x80;

/// Serializes an integer in `[0, 2^256)` into 32 big-endian bytes.
pub fn to_bytes32<T: ToBigInt>(value: &T) -> Result<[u8; 32], Error> {
    let value = value.to_bigint().ok_or(Error::ValueOutOfRange)?;
    let (sign, magnitude) = value.to_bytes_be();
    if sign == Sign::Minus || magnitude.len() > 32 {
        return Err(Error::ValueOutOfRange);
    }
    let mut bytes = [0u8; 32];
    bytes[32 - magnitude.len()..].copy_from_slice(&magnitude);
    Ok(bytes)
}

pub fn from_bytes32(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// `0x` followed by exactly 64 lowercase hex digits.
pub fn to_hex32<T: ToBigInt>(value: &T) -> Result<String, Error> {
    Ok(format!("0x{}", hex::encode(to_bytes32(value)?)))
}

/// Parses `0x` followed by at most 64 hex digits (either case), left-padding short inputs.
pub fn from_hex32(input: &str) -> Result<BigUint, Error> {
    let invalid = || Error::InvalidHex(input.to_string());
    let digits = input.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.is_empty() || digits.len() > 64 {
        return Err(invalid());
    }
    let padded = format!("{digits:0>64}");
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(padded, &mut bytes).map_err(|_| invalid())?;
    Ok(from_bytes32(&bytes))
}

/// Canonical integer representative of a base field element, in `[0, p - 1]`.
pub fn field_to_biguint(element: &Fq) -> BigUint {
    BigUint::from_bytes_le(&element.into_bigint().to_bytes_le())
}

/// Base field element from an integer, rejecting anything outside `[0, p - 1]`.
pub fn field_from_biguint(value: &BigUint) -> Result<Fq, Error> {
    let element = Fq::from_le_bytes_mod_order(&value.to_bytes_le());
    if &field_to_biguint(&element) != value {
        return Err(Error::InvalidPoint("coordinate is not a canonical field element"));
    }
    Ok(element)
}

/// A compressed Baby Jubjub point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackedPoint(BigUint);

impl PackedPoint {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn pack(point: &Point) -> Self {
        Self(BigUint::from_bytes_le(&pack_le(point)))
    }

    pub fn unpack(&self) -> Result<Point, Error> {
        let mut wire = [0u8; 32];
        let le = self.0.to_bytes_le();
        if le.len() > 32 {
            return Err(Error::ValueOutOfRange);
        }
        wire[..le.len()].copy_from_slice(&le);
        unpack_le(&wire)
    }

    pub fn from_hex(input: &str) -> Result<Self, Error> {
        from_hex32(input).map(Self)
    }

    pub fn to_hex(&self) -> Result<String, Error> {
        to_hex32(&self.0)
    }

    /// The 32 byte little-endian wire form.
    pub fn to_le_bytes(&self) -> Result<[u8; 32], Error> {
        let mut bytes = to_bytes32(&self.0)?;
        bytes.reverse();
        Ok(bytes)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<PackedPoint> for BigUint {
    fn from(packed: PackedPoint) -> Self {
        packed.0
    }
}

impl From<BigUint> for PackedPoint {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

fn is_negative(x: &Fq) -> bool {
    x.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// Compresses a point into its 32 byte little-endian wire form.
pub fn pack_le(point: &Point) -> [u8; 32] {
    let mut wire = [0u8; 32];
    wire.copy_from_slice(&point.y.into_bigint().to_bytes_le());
    if is_negative(&point.x) {
        wire[31] |= SIGN_BIT;
    }
    wire
}

/// Recovers a point from its wire form by solving the curve equation for `x`.
///
/// Only curve membership is established here, subgroup membership is up to the caller.
pub fn unpack_le(wire: &[u8; 32]) -> Result<Point, Error> {
    let mut y_bytes = *wire;
    let negative = y_bytes[31] & SIGN_BIT != 0;
    y_bytes[31] &= !SIGN_BIT;

    let y = Fq::from_le_bytes_mod_order(&y_bytes);
    if y.into_bigint().to_bytes_le() != y_bytes {
        return Err(Error::InvalidPoint("y coordinate is not reduced"));
    }

    // x^2 = (1 - y^2) / (a - d y^2)
    let y2 = y.square();
    let denominator = <BabyJubjubConfig as TECurveConfig>::COEFF_A
        - <BabyJubjubConfig as TECurveConfig>::COEFF_D * y2;
    let x2 = (Fq::one() - y2)
        * denominator
            .inverse()
            .ok_or(Error::InvalidPoint("no x coordinate for y"))?;
    let mut x = x2
        .sqrt()
        .ok_or(Error::InvalidPoint("no x coordinate for y"))?;
    if is_negative(&x) {
        x = -x;
    }
    if negative {
        if x.is_zero() {
            return Err(Error::InvalidPoint("sign bit set for x = 0"));
        }
        x = -x;
    }

    let point = Point::new_unchecked(x, y);
    debug_assert!(point.is_on_curve());
    Ok(point)
}

/// Point coordinates as `bytes32` hex strings, the input format of the discrete log search.
pub fn point_to_hex_coords(point: &Point) -> Result<(String, String), Error> {
    Ok((
        to_hex32(&field_to_biguint(&point.x))?,
        to_hex32(&field_to_biguint(&point.y))?,
    ))
}

pub fn point_from_hex_coords(x: &str, y: &str) -> Result<Point, Error> {
    let x = field_from_biguint(&from_hex32(x)?)?;
    let y = field_from_biguint(&from_hex32(y)?)?;
    let point = Point::new_unchecked(x, y);
    if !point.is_on_curve() {
        return Err(Error::InvalidPoint("coordinates do not satisfy the curve equation"));
    }
    Ok(point)
}
