use super::{Fr, Point, SUBGROUP_ORDER};
use crate::Error;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use once_cell::sync::OnceCell;

/// A cached, process-wide setup step.
///
/// The first caller runs the loader while concurrent callers wait on the same attempt. A
/// failed attempt leaves the cell empty, so the error reaches the caller that triggered it and
/// the next call runs the loader again instead of inheriting a poisoned state.
///
/// Callers blocked on a failed attempt do not receive its error. Each of them runs the loader
/// in turn, so they only observe the same failure when the loader is deterministic, as
/// [`CurveParams::load`] is.
#[derive(Debug)]
pub struct CurveSetup<T> {
    cell: OnceCell<T>,
}

impl<T> Default for CurveSetup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CurveSetup<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_try_init<F>(&self, loader: F) -> Result<&T, Error>
    where
        F: FnOnce() -> Result<T, Error>,
    {
        self.cell.get_or_try_init(|| {
            loader().map_err(|e| {
                log::debug!("curve setup failed, will retry on next use: {e}");
                e
            })
        })
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Validated Baby Jubjub parameters shared by every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    base: Point,
    order: BigUint,
    order_minus_one: <Fr as PrimeField>::BigInt,
}

impl CurveParams {
    pub fn load() -> Result<Self, Error> {
        let order = BigUint::parse_bytes(SUBGROUP_ORDER.as_bytes(), 10)
            .ok_or_else(|| Error::Initialization("unparsable subgroup order".to_string()))?;
        let modulus = BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le());
        if order != modulus {
            return Err(Error::Initialization(
                "subgroup order does not match the scalar field".to_string(),
            ));
        }

        let base = Point::generator();
        if !base.is_on_curve() {
            return Err(Error::Initialization("base point is not on the curve".to_string()));
        }
        if !base.mul_bigint(Fr::MODULUS).into_affine().is_zero() || base.is_zero() {
            return Err(Error::Initialization(
                "base point does not generate the prime subgroup".to_string(),
            ));
        }

        let mut order_minus_one = Fr::MODULUS;
        order_minus_one.sub_with_borrow(&<Fr as PrimeField>::BigInt::from(1u64));

        log::debug!("loaded Baby Jubjub parameters, subgroup order {order}");
        Ok(Self {
            base,
            order,
            order_minus_one,
        })
    }

    pub fn base_point(&self) -> Point {
        self.base
    }

    /// The subgroup order `l`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// `l - 1`, which acts as `-1` when used as a scalar multiplicand.
    pub fn order_minus_one(&self) -> <Fr as PrimeField>::BigInt {
        self.order_minus_one
    }

    /// Additive inverse of a subgroup element, computed as `(l - 1) * point`.
    pub fn negate(&self, point: &Point) -> Point {
        point.mul_bigint(self.order_minus_one).into_affine()
    }

    /// Whether `point` is on the curve and `l * point` is the identity.
    pub fn in_subgroup(&self, point: &Point) -> bool {
        point.is_on_curve() && point.mul_bigint(Fr::MODULUS).into_affine().is_zero()
    }
}

static CURVE: CurveSetup<CurveParams> = CurveSetup::new();

/// Returns the process-wide curve parameters, loading them on first use.
pub fn curve() -> Result<&'static CurveParams, Error> {
    CURVE.get_or_try_init(CurveParams::load)
}
