use crate::codec::{from_hex32, to_hex32, PackedPoint};
use crate::curve::{curve, Fr, Point};
use crate::random::sample;
use crate::Error;
use ark_ec::CurveGroup;
use ark_ff::{BigInteger, PrimeField};
use ark_std::rand::{CryptoRng, RngCore};
use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;

/// A Baby Jubjub private key, a scalar in `[1, l - 1]` when generated by [`KeyPair`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(Fr);

impl ark_std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl PrivateKey {
    /// Samples a key uniformly from `[1, l - 1]`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let order = curve()?.order();
        // uniform in [0, l - 2], shifted away from the identity-deriving zero key
        let offset = sample(&(order - BigUint::from(2u8)), rng)?;
        Self::from_biguint(&(offset + BigUint::one()))
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self, Error> {
        if value >= curve()?.order() {
            return Err(Error::ScalarOutOfRange);
        }
        Ok(Self(Fr::from_le_bytes_mod_order(&value.to_bytes_le())))
    }

    pub fn from_hex(input: &str) -> Result<Self, Error> {
        Self::from_biguint(&from_hex32(input)?)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }

    pub fn to_hex(&self) -> Result<String, Error> {
        to_hex32(&self.to_biguint())
    }

    pub fn scalar(&self) -> &Fr {
        &self.0
    }

    pub fn public_key(&self) -> Result<PublicKey, Error> {
        derive_public_key(self)
    }
}

impl From<Fr> for PrivateKey {
    fn from(scalar: Fr) -> Self {
        Self(scalar)
    }
}

/// A point of the prime order subgroup, `private_key * Base8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wraps a point without checking it.
    ///
    /// Encrypting to a point outside the prime order subgroup silently breaks decryption, use
    /// [`PublicKey::validated`] for keys of unknown origin.
    pub fn from_point_unchecked(point: Point) -> Self {
        Self(point)
    }

    pub fn validated(point: Point) -> Result<Self, Error> {
        if !point.is_on_curve() {
            return Err(Error::InvalidPoint("public key is not on the curve"));
        }
        if !curve()?.in_subgroup(&point) {
            return Err(Error::NotInSubgroup);
        }
        Ok(Self(point))
    }

    /// Unpacks a compressed key. The result is on the curve but its subgroup is not checked.
    pub fn from_packed(packed: &PackedPoint) -> Result<Self, Error> {
        packed.unpack().map(Self)
    }

    pub fn pack(&self) -> PackedPoint {
        PackedPoint::pack(&self.0)
    }

    pub fn point(&self) -> &Point {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let private_key = PrivateKey::generate(rng)?;
        let public_key = derive_public_key(&private_key)?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Generates a key pair from the operating system's entropy source.
    pub fn random() -> Result<Self, Error> {
        Self::generate(&mut OsRng)
    }
}

pub fn derive_public_key(private_key: &PrivateKey) -> Result<PublicKey, Error> {
    let base = curve()?.base_point();
    Ok(PublicKey((base * private_key.0).into_affine()))
}
