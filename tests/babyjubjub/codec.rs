use crate::*;
use bjj_elgamal::codec::{pack_le, point_to_hex_coords, unpack_le};
use bjj_elgamal::{from_hex32, to_hex32, Error, PackedPoint, PublicKey};
use num_bigint::BigUint;

// little-endian wire form of the packed public key, as produced by the circuit library
const PACKED_VECTORS: [(&str, [u8; 32]); 3] = [
    (
        "0x0510bae26a9b59ebad67a4324c944b1910a778e8481d7f08ddba6bcd2b94b2c4",
        [
            0xdc, 0x9f, 0x9f, 0xdb, 0x74, 0x6d, 0x0f, 0x07, 0xb0, 0x04, 0xcc, 0x43, 0x16, 0xe3,
            0x49, 0x5a, 0x58, 0x57, 0x0b, 0x90, 0x66, 0x14, 0x99, 0xf8, 0xa6, 0xa6, 0x69, 0x6f,
            0xf4, 0x15, 0x6b, 0xaa,
        ],
    ),
    (
        "0x03d7c10d654c601b60f2380551b4782896335c48f5d56662b1d0604dd22c8568",
        [
            0x0c, 0x07, 0x99, 0x9c, 0x15, 0xd4, 0x06, 0xbc, 0x08, 0xd7, 0xf3, 0xf3, 0x1f, 0x62,
            0xce, 0xdb, 0xc8, 0x9e, 0xbf, 0x3a, 0x53, 0xff, 0x4d, 0x3b, 0xf7, 0xe2, 0xd0, 0xdd,
            0xa9, 0x31, 0x49, 0x04,
        ],
    ),
    (
        "0x032336193e8d6ebf273828eb9d6600badbc7cd795c639dbe364307cd121473f2",
        [
            0x29, 0x48, 0x3d, 0xe5, 0xe8, 0x1d, 0xe9, 0x89, 0x3b, 0x56, 0x58, 0xd6, 0x05, 0x01,
            0xa4, 0x56, 0x19, 0x8f, 0xd4, 0xbb, 0x39, 0xe4, 0x91, 0x6c, 0x2e, 0x30, 0xf2, 0x42,
            0x23, 0xdf, 0xf0, 0xa6,
        ],
    ),
];

fn le_to_be_hex(mut wire: [u8; 32]) -> String {
    wire.reverse();
    format!("0x{}", hex::encode(wire))
}

#[test]
fn packed_public_keys_match_circuit_library() {
    for (key, wire) in PACKED_VECTORS {
        let public_key = private_key(key).public_key().unwrap();
        let packed = public_key.pack();
        assert_eq!(packed.to_hex().unwrap(), le_to_be_hex(wire));
        assert_eq!(pack_le(public_key.point()), wire);
        assert_eq!(packed.to_le_bytes().unwrap(), wire);
    }
}

#[test]
fn first_vector_as_hex_constant() {
    let packed = private_key(PACKED_VECTORS[0].0).public_key().unwrap().pack();
    assert_eq!(
        to_hex32(packed.as_biguint()).unwrap(),
        "0xaa6b15f46f69a6a6f8991466900b57585a49e31643cc04b0070f6d74db9f9fdc"
    );
    // x > (p - 1) / 2 for this key, so the sign bit is set
    assert_eq!(packed.to_le_bytes().unwrap()[31] & 0x80, 0x80);
}

#[test]
fn unpacked_public_keys_round_trip() {
    let keys = [
        "0x01e5cc52b94418c1d361a3479870df1f46fc4b3e697153843505053dd8b092da",
        "0x05f53084112e74844b82f7cffe0ca07230681243ec3c77d53a6f31f5b04f7c4a",
        "0x04edd04fa218f3b0f32e109696a00baeb5f5b5bc6082b9dd53ff1ad1efe48f29",
        "0x00edd199d52b82a65e7aaf6951f792462a84680022e139d8acf1c07d5168a827",
        "0x01975e987782456b7e73a34835934b6a20c196f750bc7390c0f7d8303b469f7e",
    ];
    for key in keys {
        let public_key = private_key(key).public_key().unwrap();
        let packed = public_key.pack();
        let unpacked = PublicKey::from_packed(&packed).unwrap();
        assert_eq!(unpacked, public_key);

        let from_hex = PackedPoint::from_hex(&packed.to_hex().unwrap()).unwrap();
        assert_eq!(from_hex, packed);
        assert!(PublicKey::validated(*unpacked.point()).is_ok());
    }
}

#[test]
fn random_points_round_trip() {
    for m in [1u64, 2, 3, 8, 1 << 20, (1 << 40) - 1] {
        let point = embed(m);
        assert_eq!(unpack_le(&pack_le(&point)).unwrap(), point);
        assert_eq!(PackedPoint::pack(&point).unpack().unwrap(), point);
    }
    let point = key_pair().public_key;
    assert_eq!(PublicKey::from_packed(&point.pack()).unwrap(), point);
}

#[test]
fn unpack_rejects_invalid_y() {
    let packed = PackedPoint::new(BigUint::from(2u8));
    assert!(matches!(packed.unpack(), Err(Error::InvalidPoint(_))));
    // same y with the sign bit set
    let packed = PackedPoint::new(BigUint::from(2u8) + (BigUint::from(1u8) << 255));
    assert!(matches!(packed.unpack(), Err(Error::InvalidPoint(_))));
}

#[test]
fn embedded_point_hex_coordinates() {
    let (x, y) = point_to_hex_coords(&embed(65545)).unwrap();
    assert_eq!(
        from_hex32(&x).unwrap(),
        from_hex32("0x05e712cbd0bee349ab612d42b81672d48546ab29a90798ad2b88f64585f0c805").unwrap()
    );
    assert_eq!(
        y,
        "0x00bdb2d53146a7d643d6c6870319fe563a253f78c18a48e3fa45b6d7d9d3c310"
    );
}

#[test]
fn identity_packs_to_one() {
    let identity = <Point as AffineRepr>::zero();
    let packed = PackedPoint::pack(&identity);
    assert_eq!(packed.as_biguint(), &BigUint::from(1u8));
    assert_eq!(packed.unpack().unwrap(), identity);
}
