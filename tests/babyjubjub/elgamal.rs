use crate::*;
use ark_std::Zero;
use bjj_elgamal::dlog::{search_sharded, DiscreteLog, PLAINTEXT_BOUND};
use bjj_elgamal::encrypt::elgamal::{encrypt_batch, encrypt_with_rng};
use bjj_elgamal::{
    add_points, decrypt_to_embedded, encrypt, encrypt_packed, Cipher, EncryptionEngine, Error,
    ExponentialElgamal, Randomness, MAX_PLAINTEXT,
};
use std::ops::Range;

struct Table(Vec<(u64, Point)>);

impl DiscreteLog for Table {
    fn search(&self, embedded: &Point, range: Range<u64>) -> Option<u64> {
        self.0
            .iter()
            .find(|(m, point)| range.contains(m) && point == embedded)
            .map(|(m, _)| *m)
    }
}

#[test]
fn decryption_recovers_embedded_plaintext() {
    let pair = key_pair();
    let rng = &mut test_rng();
    for m in [0u64, 1, 65545, 1 << 32, MAX_PLAINTEXT] {
        let encrypted = encrypt_with_rng(&pair.public_key, &m, rng).unwrap();
        let embedded = decrypt_to_embedded(&pair.private_key, &encrypted.c1(), &encrypted.c2());
        assert_eq!(embedded.unwrap(), embed(m));
    }
}

#[test]
fn known_key_with_packed_public_key() {
    let private_key =
        private_key("0x0510bae26a9b59ebad67a4324c944b1910a778e8481d7f08ddba6bcd2b94b2c4");
    let packed = private_key.public_key().unwrap().pack();
    let encrypted = encrypt_packed(&packed, &4444u64).unwrap();
    let embedded = decrypt_to_embedded(&private_key, &encrypted.c1(), &encrypted.c2()).unwrap();

    let table = Table(vec![(4444, embed(4444)), (4445, embed(4445))]);
    assert_eq!(
        search_sharded(&table, &embedded, 0..PLAINTEXT_BOUND, 8),
        Ok(4444)
    );
}

#[test]
fn homomorphic_addition() {
    let pair = key_pair();
    let rng = &mut test_rng();
    let m1 = 123_456u64;
    let m2 = 654_321u64;
    let e1 = encrypt_with_rng(&pair.public_key, &m1, rng).unwrap();
    let e2 = encrypt_with_rng(&pair.public_key, &m2, rng).unwrap();

    let c1 = add_points(&e1.c1(), &e2.c1());
    let c2 = add_points(&e1.c2(), &e2.c2());
    assert_eq!(Cipher::new(c1, c2), e1.cipher + e2.cipher);
    assert_eq!(
        decrypt_to_embedded(&pair.private_key, &c1, &c2).unwrap(),
        embed(m1 + m2)
    );

    // the sum is exactly an encryption under the summed randomness
    let randomness: Randomness = e1.randomness + e2.randomness;
    let expected =
        ExponentialElgamal::encrypt_with_randomness(&(m1 + m2), &pair.public_key, &randomness);
    assert_eq!(expected.unwrap(), Cipher::new(c1, c2));
}

#[test]
fn folding_many_ciphertexts() {
    let pair = key_pair();
    let plaintexts: Vec<u64> = (1..=10).collect();
    let encrypted = encrypt_batch(&pair.public_key, &plaintexts).unwrap();
    let total = encrypted
        .iter()
        .fold(Cipher::zero(), |acc, value| acc + value.cipher);
    let embedded = ExponentialElgamal::decrypt(&total, &pair.private_key).unwrap();
    assert_eq!(embedded, embed(55));
}

#[test]
fn wrong_key_does_not_decrypt() {
    let pair = key_pair();
    let other = KeyPair::random().unwrap();
    let encrypted = encrypt(&pair.public_key, &42u8).unwrap();
    let embedded =
        decrypt_to_embedded(&other.private_key, &encrypted.c1(), &encrypted.c2()).unwrap();
    assert_ne!(embedded, embed(42));
}

#[test]
fn out_of_range_plaintexts() {
    let pair = key_pair();
    assert_eq!(
        encrypt(&pair.public_key, &-1i32),
        Err(Error::PlaintextOutOfRange)
    );
    assert_eq!(
        encrypt(&pair.public_key, &(1u64 << 40)),
        Err(Error::PlaintextOutOfRange)
    );
    assert!(encrypt(&pair.public_key, &((1u64 << 40) - 1)).is_ok());
}
