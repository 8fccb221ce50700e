#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]
#![deny(unused_crate_dependencies)]

//! Additively homomorphic (exponential) ElGamal over Baby Jubjub, bit-compatible with the
//! circuit-side point compression and `bytes32` encodings.

pub mod codec;
pub mod curve;
pub mod dlog;
pub mod encrypt;
pub mod keys;
pub mod random;

pub use codec::{from_bytes32, from_hex32, to_bytes32, to_hex32, PackedPoint};
pub use curve::{curve, Fq, Fr, Point, SUBGROUP_ORDER};
pub use encrypt::elgamal::{
    add_points, decrypt_to_embedded, encrypt, encrypt_packed, Cipher, EncryptedValue,
    ExponentialElgamal, Randomness, MAX_PLAINTEXT, PLAINTEXT_BITS,
};
pub use encrypt::EncryptionEngine;
pub use keys::{KeyPair, PrivateKey, PublicKey};

use thiserror::Error as ErrorT;

#[derive(Debug, ErrorT, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("plaintext must be an integer between 0 and 2^40 - 1")]
    PlaintextOutOfRange,
    #[error("the value is not between 0 and 2^256 - 1")]
    ValueOutOfRange,
    #[error("scalar must be smaller than the subgroup order")]
    ScalarOutOfRange,
    #[error("invalid hex string: expected 0x followed by at most 64 hex digits, got {0:?}")]
    InvalidHex(String),
    #[error("invalid point: {0}")]
    InvalidPoint(&'static str),
    #[error("point is not in the prime order subgroup")]
    NotInSubgroup,
    #[error("curve initialization failed: {0}")]
    Initialization(String),
    #[error("secure random source unavailable: {0}")]
    Entropy(String),
    #[error("discrete log not found in the searched range")]
    DiscreteLogNotFound,
}
