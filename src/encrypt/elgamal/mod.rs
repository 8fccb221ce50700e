use super::EncryptionEngine;
use crate::codec::PackedPoint;
use crate::curve::{curve, Fr, Point};
use crate::keys::{PrivateKey, PublicKey};
use crate::random::sample;
use crate::Error;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::ops::Add;
use ark_std::rand::{CryptoRng, RngCore};
use ark_std::Zero;
use num_bigint::{BigUint, ToBigInt};
use num_traits::{One, ToPrimitive};
use rand::rngs::OsRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Plaintexts are bounded so that the embedded point stays within reach of a
/// baby-step giant-step search.
pub const PLAINTEXT_BITS: u32 = 40;
pub const MAX_PLAINTEXT: u64 = (1 << PLAINTEXT_BITS) - 1;

pub struct ExponentialElgamal;

/// Exponential Elgamal ciphertext.
///
/// It contains `c1 = r * G` and `c2 = m * G + r * K` where `G` is the Base8 generator,
/// `K = k * G` is the public encryption key computed from the private key `k`, `r` is some
/// random scalar and `m` is the plaintext.
#[derive(Clone, Copy, Debug, Eq, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Cipher {
    c1: Point,
    c2: Point,
}

impl Default for Cipher {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Cipher {
    fn zero() -> Self {
        Self {
            c1: <Point as AffineRepr>::zero(),
            c2: <Point as AffineRepr>::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        <Point as AffineRepr>::is_zero(&self.c1) && <Point as AffineRepr>::is_zero(&self.c2)
    }
}

impl Cipher {
    /// Builds a ciphertext from two points. Both must lie in the prime order subgroup.
    pub fn new(c1: Point, c2: Point) -> Self {
        Self { c1, c2 }
    }

    pub fn c1(&self) -> Point {
        self.c1
    }

    pub fn c2(&self) -> Point {
        self.c2
    }
}

/// Homomorphic addition. The sum decrypts to the sum of the plaintexts and was encrypted
/// with the sum of the randomness values, which the caller has to track if needed.
impl Add for Cipher {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            c1: add_points(&self.c1, &rhs.c1),
            c2: add_points(&self.c2, &rhs.c2),
        }
    }
}

/// The ephemeral encryption scalar `r`.
///
/// It has to stay private. It is only kept around as a witness for proofs about the
/// ciphertext and must never be published next to it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Randomness(Fr);

impl ark_std::fmt::Debug for Randomness {
    fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
        f.write_str("Randomness(..)")
    }
}

impl Randomness {
    /// Samples uniformly from `[0, l - 1]`.
    pub fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let max = curve()?.order() - BigUint::one();
        let value = sample(&max, rng)?;
        Ok(Self(Fr::from_le_bytes_mod_order(&value.to_bytes_le())))
    }

    pub fn scalar(&self) -> &Fr {
        &self.0
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }
}

impl From<Fr> for Randomness {
    fn from(scalar: Fr) -> Self {
        Self(scalar)
    }
}

impl Add for Randomness {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// The result of an encryption: the transmissible ciphertext and its secret randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncryptedValue {
    pub cipher: Cipher,
    pub randomness: Randomness,
}

impl EncryptedValue {
    pub fn c1(&self) -> Point {
        self.cipher.c1()
    }

    pub fn c2(&self) -> Point {
        self.cipher.c2()
    }
}

impl EncryptionEngine for ExponentialElgamal {
    type EncryptionKey = PublicKey;
    type DecryptionKey = PrivateKey;
    type Cipher = Cipher;
    type PlainText = u64;
    type Randomness = Randomness;
    type Decrypted = Point;

    fn encrypt<R: RngCore + CryptoRng>(
        data: &Self::PlainText,
        key: &Self::EncryptionKey,
        rng: &mut R,
    ) -> Result<Self::Cipher, Error> {
        Self::encrypt_value(data, key, rng).map(|encrypted| encrypted.cipher)
    }

    fn encrypt_with_randomness(
        data: &Self::PlainText,
        key: &Self::EncryptionKey,
        randomness: &Self::Randomness,
    ) -> Result<Self::Cipher, Error> {
        check_plaintext(*data)?;
        let base = curve()?.base_point();
        // r * K
        let shared_secret = *key.point() * randomness.0;
        // r * G
        let c1 = base * randomness.0;
        // m * G + r * K
        let c2 = base.mul_bigint([*data]) + shared_secret;
        Ok(Cipher::new(c1.into_affine(), c2.into_affine()))
    }

    fn decrypt(cipher: &Self::Cipher, key: &Self::DecryptionKey) -> Result<Self::Decrypted, Error> {
        Self::decrypt_exp(cipher, key)
    }
}

impl ExponentialElgamal {
    /// Encrypts with freshly sampled randomness and hands the randomness back to the caller.
    pub fn encrypt_value<R: RngCore + CryptoRng>(
        data: &u64,
        key: &PublicKey,
        rng: &mut R,
    ) -> Result<EncryptedValue, Error> {
        check_plaintext(*data)?;
        let randomness = Randomness::sample(rng)?;
        let cipher = Self::encrypt_with_randomness(data, key, &randomness)?;
        Ok(EncryptedValue { cipher, randomness })
    }

    /// Recovers the embedded plaintext `m * G`, not `m` itself.
    pub fn decrypt_exp(cipher: &Cipher, key: &PrivateKey) -> Result<Point, Error> {
        let params = curve()?;
        // k * c1 = k * r * G = r * K
        let shared_secret = (cipher.c1() * key.scalar()).into_affine();
        // scalar multiplication by l - 1 = -1 (mod l)
        let shared_secret_inverse = params.negate(&shared_secret);
        Ok(add_points(&cipher.c2(), &shared_secret_inverse))
    }
}

fn check_plaintext(plaintext: u64) -> Result<(), Error> {
    if plaintext > MAX_PLAINTEXT {
        return Err(Error::PlaintextOutOfRange);
    }
    Ok(())
}

fn plaintext_from<T: ToBigInt>(plaintext: &T) -> Result<u64, Error> {
    let plaintext = plaintext
        .to_bigint()
        .and_then(|value| value.to_u64())
        .ok_or(Error::PlaintextOutOfRange)?;
    check_plaintext(plaintext)?;
    Ok(plaintext)
}

/// Encrypts an integer in `[0, 2^40 - 1]` using the operating system's entropy source.
///
/// `public_key` must lie in the prime order subgroup, see [`PublicKey::validated`].
pub fn encrypt<T: ToBigInt>(public_key: &PublicKey, plaintext: &T) -> Result<EncryptedValue, Error> {
    encrypt_with_rng(public_key, plaintext, &mut OsRng)
}

pub fn encrypt_with_rng<T, R>(
    public_key: &PublicKey,
    plaintext: &T,
    rng: &mut R,
) -> Result<EncryptedValue, Error>
where
    T: ToBigInt,
    R: RngCore + CryptoRng,
{
    let plaintext = plaintext_from(plaintext)?;
    ExponentialElgamal::encrypt_value(&plaintext, public_key, rng)
}

/// Same as [`encrypt`] with the public key in packed form.
pub fn encrypt_packed<T: ToBigInt>(
    packed_public_key: &PackedPoint,
    plaintext: &T,
) -> Result<EncryptedValue, Error> {
    let plaintext = plaintext_from(plaintext)?;
    let public_key = PublicKey::from_packed(packed_public_key)?;
    encrypt(&public_key, &plaintext)
}

/// Encrypts every plaintext with its own randomness.
pub fn encrypt_batch(
    public_key: &PublicKey,
    plaintexts: &[u64],
) -> Result<Vec<EncryptedValue>, Error> {
    #[cfg(not(feature = "parallel"))]
    let plaintexts = plaintexts.iter();
    #[cfg(feature = "parallel")]
    let plaintexts = plaintexts.par_iter();

    plaintexts
        .map(|plaintext| ExponentialElgamal::encrypt_value(plaintext, public_key, &mut OsRng))
        .collect()
}

pub fn decrypt_to_embedded(private_key: &PrivateKey, c1: &Point, c2: &Point) -> Result<Point, Error> {
    ExponentialElgamal::decrypt_exp(&Cipher::new(*c1, *c2), private_key)
}

/// `p1 + p2`. Both points have to be on the curve.
pub fn add_points(p1: &Point, p2: &Point) -> Point {
    (*p1 + *p2).into_affine()
}
