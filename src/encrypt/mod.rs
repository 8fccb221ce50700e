pub mod elgamal;

use crate::Error;
use ark_std::rand::{CryptoRng, RngCore};

pub trait EncryptionEngine {
    type EncryptionKey;
    type DecryptionKey;
    type Cipher;
    type PlainText;
    type Randomness;
    /// What decryption recovers. For exponential Elgamal this is the embedded plaintext point.
    type Decrypted;

    fn encrypt<R: RngCore + CryptoRng>(
        data: &Self::PlainText,
        key: &Self::EncryptionKey,
        rng: &mut R,
    ) -> Result<Self::Cipher, Error>;
    fn encrypt_with_randomness(
        data: &Self::PlainText,
        key: &Self::EncryptionKey,
        randomness: &Self::Randomness,
    ) -> Result<Self::Cipher, Error>;
    fn decrypt(cipher: &Self::Cipher, key: &Self::DecryptionKey)
        -> Result<Self::Decrypted, Error>;
}
