//! bign-curve256v1: the 128-bit security level curve.

pub(crate) mod field;
pub(crate) mod scalar;

pub use self::scalar::Scalar;

use self::field::FieldElement;
use crate::{params::BIGN128, BignCurve, CurveParameters};
use elliptic_curve::{
    bigint::U256,
    consts::{U16, U32, U48, U65},
    point::DecompressPoint,
    subtle::{Choice, CtOption},
    CurveArithmetic, FieldBytesEncoding,
};
use primeorder::{point_arithmetic, PrimeCurveParams};

/// BIGN P-256 elliptic curve.
///
/// This curve is also known as bign-curve256v1
/// and is specified in [STB 34.101.45-2013]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ + ax + b` over a ~256-bit prime field.
///
/// ```text
/// a = 115792089237316195423570985008687907853269984665640564039457584007913129639744
/// b = 54189945433829174764701416670523239872420438478408031144987871676190519198705
/// ```
///
/// [STB 34.101.45-2013]: https://apmi.bsu.by/assets/files/std/bign-spec294.pdf
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BignP256;

impl elliptic_curve::Curve for BignP256 {
    /// 256-bit integer type used for internally representing field elements.
    type FieldBytesSize = U32;
    type Uint = U256;

    /// Order of BIGN P-256's elliptic curve group (i.e. scalar modulus).
    const ORDER: U256 = U256::from_be_hex(BIGN128.n);
}

impl elliptic_curve::PrimeCurve for BignP256 {}

impl FieldBytesEncoding<BignP256> for U256 {}

impl CurveArithmetic for BignP256 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveParams for BignP256 {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;

    const EQUATION_A: FieldElement = FieldElement::from_hex(BIGN128.a);
    const EQUATION_B: FieldElement = FieldElement::from_hex(BIGN128.b);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex(BIGN128.gx),
        FieldElement::from_hex(BIGN128.gy),
    );
}

impl BignCurve for BignP256 {
    type HalfSize = U16;
    type SignatureSize = U48;
    type PublicKeySize = U65;

    const PARAMETERS: CurveParameters = BIGN128;

    fn decompress(x: &FieldBytes, y_is_odd: Choice) -> CtOption<AffinePoint> {
        AffinePoint::decompress(x, y_is_odd)
    }
}

/// BIGN P-256 field element serialized as bytes.
///
/// Byte array containing a serialized field element value (base field or
/// scalar), big-endian.
pub type FieldBytes = elliptic_curve::FieldBytes<BignP256>;

/// BIGN P-256 elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<BignP256>;

/// BIGN P-256 elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<BignP256>;

/// Non-zero scalar modulo the BIGN P-256 group order.
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<BignP256>;

/// BIGN P-256 public key.
pub type PublicKey = crate::PublicKey<BignP256>;

/// BIGN P-256 signature.
pub type Signature = crate::dsa::Signature<BignP256>;

/// BIGN P-256 signing key.
pub type SigningKey = crate::dsa::SigningKey<BignP256>;

/// BIGN P-256 verifying key.
pub type VerifyingKey = crate::dsa::VerifyingKey<BignP256>;

#[cfg(test)]
mod tests {
    use super::{AffinePoint, BignP256, FieldBytes, ProjectivePoint, Scalar};
    use crate::BignCurve;
    use elliptic_curve::{
        group::{Curve, Group},
        ops::{LinearCombination, MulByGenerator},
        point::AffineCoordinates,
        subtle::Choice,
        PrimeField,
    };
    use hex_literal::hex;

    #[test]
    fn generator_is_on_curve() {
        let g = BignP256::decompress(&FieldBytes::default(), Choice::from(1)).unwrap();
        assert_eq!(g, AffinePoint::GENERATOR);
        assert_eq!(
            g.x(),
            FieldBytes::from(hex!(
                "0000000000000000000000000000000000000000000000000000000000000000"
            ))
        );
    }

    #[test]
    fn order_annihilates_generator() {
        let n_minus_one = -Scalar::ONE;
        let p = ProjectivePoint::mul_by_generator(&n_minus_one) + ProjectivePoint::GENERATOR;
        assert!(bool::from(p.is_identity()));
    }

    #[test]
    fn lincomb_matches_separate_products() {
        let k = Scalar::from_u64(0x0123_4567_89ab_cdef);
        let l = Scalar::from_u64(0xfedc_ba98);
        let q = ProjectivePoint::mul_by_generator(&Scalar::from_u64(7));
        let expected = ProjectivePoint::GENERATOR * k + q * l;
        let actual = ProjectivePoint::lincomb(&ProjectivePoint::GENERATOR, &k, &q, &l);
        assert_eq!(actual.to_affine(), expected.to_affine());
    }

    #[test]
    fn scalar_repr_round_trip() {
        let s = Scalar::from_u64(42).invert().unwrap();
        assert_eq!(Scalar::from_repr(s.to_repr()).unwrap(), s);
    }
}
