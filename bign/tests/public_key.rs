//! Public key encoding tests

use bign::{
    elliptic_curve::point::AffineCoordinates,
    hazmat::private_key_from_le_bytes,
    BignCurve, BignP256, BignP384, BignP512, Error, PublicKey,
};
use hex_literal::hex;
use proptest::prelude::*;

const PUBLIC_KEY: [u8; 65] = hex!(
    "04"
    "BD1A5650 179D79E0 3FCEE49D 4C2BD5DD F54CE46D 0CF11E4F F87BF7A8 90857FD0"
    "7AC6A603 61E8C817 3491686D 461B2826 190C2EDA 5909054A 9AB84D2A B9D99A90"
);

const X: [u8; 48] = hex!(
    "B194BAC8 0A08F53B 366D008E 584A5DE4"
    "8504FA9D 1BB6C7AC 252E72C2 02FDCE0D"
    "5BE3D612 17B96181 FE6786AD 716B890B"
);

fn public_key<C: BignCurve>(private_key: &[u8]) -> PublicKey<C> {
    let d = private_key_from_le_bytes::<C>(private_key).unwrap();
    PublicKey::from_secret_scalar(&d).unwrap()
}

#[test]
fn decode_test_vector() {
    let pk = PublicKey::<BignP256>::from_bytes(&PUBLIC_KEY).unwrap();
    assert_eq!(pk.as_bytes(), &PUBLIC_KEY);
    assert_eq!(pk.to_bytes().as_slice(), &PUBLIC_KEY);

    let mut x = pk.as_affine().x();
    x.reverse();
    assert_eq!(x.as_slice(), &PUBLIC_KEY[1..33]);

    let d = hex!("1F66B5B8 4B733967 4533F032 9C74F218 34281FED 0732429E 0C79235F C273E269");
    assert_eq!(public_key::<BignP256>(&d), pk);
}

#[test]
fn encode_all_curves() {
    let pk = public_key::<BignP384>(&X);
    assert_eq!(pk.as_bytes().len(), BignP384::PARAMETERS.public_key_length());
    assert_eq!(PublicKey::<BignP384>::from_bytes(pk.as_bytes()).unwrap(), pk);

    let mut d = [0u8; 64];
    d[..48].copy_from_slice(&X);
    d[48..].copy_from_slice(&X[..16]);
    let pk = public_key::<BignP512>(&d);
    assert_eq!(pk.as_bytes().len(), BignP512::PARAMETERS.public_key_length());
    assert_eq!(
        PublicKey::<BignP512>::try_from(pk.as_bytes()).unwrap(),
        pk
    );
}

#[test]
fn decompression_agrees_with_decoding() {
    let pk = PublicKey::<BignP256>::from_bytes(&PUBLIC_KEY).unwrap();
    let affine = pk.as_affine();
    let point = BignP256::decompress(&affine.x(), affine.y_is_odd()).unwrap();
    assert_eq!(&point, affine);

    let other = BignP256::decompress(&affine.x(), !affine.y_is_odd()).unwrap();
    assert_ne!(&other, affine);
    assert_eq!(other.x(), affine.x());
    assert_ne!(bool::from(other.y_is_odd()), bool::from(affine.y_is_odd()));
}

#[test]
fn reject_wrong_length() {
    assert_eq!(
        PublicKey::<BignP256>::from_bytes(&PUBLIC_KEY[..64]),
        Err(Error::InvalidPoint)
    );
    assert_eq!(
        PublicKey::<BignP384>::from_bytes(&PUBLIC_KEY),
        Err(Error::InvalidPoint)
    );
    assert_eq!(PublicKey::<BignP256>::from_bytes(&[]), Err(Error::InvalidPoint));
}

#[test]
fn reject_wrong_tag() {
    for tag in [0x00, 0x02, 0x03, 0x05] {
        let mut bytes = PUBLIC_KEY;
        bytes[0] = tag;
        assert_eq!(
            PublicKey::<BignP256>::from_bytes(&bytes),
            Err(Error::InvalidPoint)
        );
    }
}

#[test]
fn reject_off_curve() {
    let mut bytes = PUBLIC_KEY;
    bytes[1] ^= 1;
    assert_eq!(
        PublicKey::<BignP256>::from_bytes(&bytes),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn reject_coordinate_out_of_range() {
    // x = p, little-endian
    let mut bytes = PUBLIC_KEY;
    bytes[1..33].copy_from_slice(&hex!(
        "43ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    ));
    assert_eq!(
        PublicKey::<BignP256>::from_bytes(&bytes),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn reject_identity_encoding() {
    let mut bytes = [0u8; 65];
    bytes[0] = 0x04;
    assert_eq!(
        PublicKey::<BignP256>::from_bytes(&bytes),
        Err(Error::InvalidPoint)
    );
}

proptest! {
    #[test]
    fn encoding_round_trip(private_key in any::<[u8; 32]>()) {
        prop_assume!(private_key_from_le_bytes::<BignP256>(&private_key).is_ok());
        let pk = public_key::<BignP256>(&private_key);
        prop_assert_eq!(pk.as_bytes()[0], 0x04);
        prop_assert_eq!(PublicKey::<BignP256>::from_bytes(pk.as_bytes()).unwrap(), pk);
    }
}
