//! bign-curve512v1: the 256-bit security level curve.

pub(crate) mod field;
pub(crate) mod scalar;

pub use self::scalar::Scalar;

use self::field::FieldElement;
use crate::{params::BIGN256, BignCurve, CurveParameters};
use elliptic_curve::{
    bigint::U512,
    consts::{U129, U32, U64, U96},
    point::DecompressPoint,
    subtle::{Choice, CtOption},
    CurveArithmetic, FieldBytesEncoding,
};
use primeorder::{point_arithmetic, PrimeCurveParams};

/// BIGN P-512 elliptic curve.
///
/// This curve is also known as bign-curve512v1 and is specified in
/// [STB 34.101.45-2013] Appendix B.
///
/// Its equation is `y² = x³ + ax + b` over a ~512-bit prime field.
///
/// ```text
/// a = 13407807929942597099574024998205846127479365820592393377723561443721764030073546976801874298166903427690031858186486050853753882811946569946433649006083524
/// b = 5693315954776639630120063851326436520321079941853637540614063305186549109521173166424386134606486352682464583832077941639002216168909012147763529108397200
/// ```
///
/// [STB 34.101.45-2013]: https://apmi.bsu.by/assets/files/std/bign-spec294.pdf
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BignP512;

impl elliptic_curve::Curve for BignP512 {
    /// 512-bit integer type used for internally representing field elements.
    type FieldBytesSize = U64;
    type Uint = U512;

    /// Order of BIGN P-512's elliptic curve group (i.e. scalar modulus).
    const ORDER: U512 = U512::from_be_hex(BIGN256.n);
}

impl elliptic_curve::PrimeCurve for BignP512 {}

impl FieldBytesEncoding<BignP512> for U512 {}

impl CurveArithmetic for BignP512 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveParams for BignP512 {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;

    const EQUATION_A: FieldElement = FieldElement::from_hex(BIGN256.a);
    const EQUATION_B: FieldElement = FieldElement::from_hex(BIGN256.b);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex(BIGN256.gx),
        FieldElement::from_hex(BIGN256.gy),
    );
}

impl BignCurve for BignP512 {
    type HalfSize = U32;
    type SignatureSize = U96;
    type PublicKeySize = U129;

    const PARAMETERS: CurveParameters = BIGN256;

    fn decompress(x: &FieldBytes, y_is_odd: Choice) -> CtOption<AffinePoint> {
        AffinePoint::decompress(x, y_is_odd)
    }
}

/// BIGN P-512 field element serialized as bytes (big-endian).
pub type FieldBytes = elliptic_curve::FieldBytes<BignP512>;

/// BIGN P-512 elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<BignP512>;

/// BIGN P-512 elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<BignP512>;

/// Non-zero scalar modulo the BIGN P-512 group order.
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<BignP512>;

/// BIGN P-512 public key.
pub type PublicKey = crate::PublicKey<BignP512>;

/// BIGN P-512 signature.
pub type Signature = crate::dsa::Signature<BignP512>;

/// BIGN P-512 signing key.
pub type SigningKey = crate::dsa::SigningKey<BignP512>;

/// BIGN P-512 verifying key.
pub type VerifyingKey = crate::dsa::VerifyingKey<BignP512>;

#[cfg(test)]
mod tests {
    use super::{AffinePoint, BignP512, FieldBytes, ProjectivePoint, Scalar};
    use crate::BignCurve;
    use elliptic_curve::{group::Group, ops::MulByGenerator, subtle::Choice};

    #[test]
    fn generator_is_on_curve() {
        let g = BignP512::decompress(&FieldBytes::default(), Choice::from(1)).unwrap();
        assert_eq!(g, AffinePoint::GENERATOR);
    }

    #[test]
    fn order_annihilates_generator() {
        let p = ProjectivePoint::mul_by_generator(&-Scalar::ONE) + ProjectivePoint::GENERATOR;
        assert!(bool::from(p.is_identity()));
    }
}
