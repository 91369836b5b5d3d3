//! bign-curve384v1: the 192-bit security level curve.

pub(crate) mod field;
pub(crate) mod scalar;

pub use self::scalar::Scalar;

use self::field::FieldElement;
use crate::{params::BIGN192, BignCurve, CurveParameters};
use elliptic_curve::{
    bigint::U384,
    consts::{U24, U48, U72, U97},
    point::DecompressPoint,
    subtle::{Choice, CtOption},
    CurveArithmetic, FieldBytesEncoding,
};
use primeorder::{point_arithmetic, PrimeCurveParams};

/// BIGN P-384 elliptic curve.
///
/// This curve is also known as bign-curve384v1 and is specified in
/// [STB 34.101.45-2013] Appendix B.
///
/// Its equation is `y² = x³ + ax + b` over a ~384-bit prime field.
///
/// ```text
/// a = 39402006196394479212279040100143613805079739270465446667948293404245721771497210611414266254884915640806627990306496
/// b = 9305714544225430607690103672579840289571010502599374151660380432967684614892230431863267093750334370523665755520868
/// ```
///
/// [STB 34.101.45-2013]: https://apmi.bsu.by/assets/files/std/bign-spec294.pdf
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BignP384;

impl elliptic_curve::Curve for BignP384 {
    /// 384-bit integer type used for internally representing field elements.
    type FieldBytesSize = U48;
    type Uint = U384;

    /// Order of BIGN P-384's elliptic curve group (i.e. scalar modulus).
    const ORDER: U384 = U384::from_be_hex(BIGN192.n);
}

impl elliptic_curve::PrimeCurve for BignP384 {}

impl FieldBytesEncoding<BignP384> for U384 {}

impl CurveArithmetic for BignP384 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveParams for BignP384 {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;

    const EQUATION_A: FieldElement = FieldElement::from_hex(BIGN192.a);
    const EQUATION_B: FieldElement = FieldElement::from_hex(BIGN192.b);
    const GENERATOR: (FieldElement, FieldElement) = (
        FieldElement::from_hex(BIGN192.gx),
        FieldElement::from_hex(BIGN192.gy),
    );
}

impl BignCurve for BignP384 {
    type HalfSize = U24;
    type SignatureSize = U72;
    type PublicKeySize = U97;

    const PARAMETERS: CurveParameters = BIGN192;

    fn decompress(x: &FieldBytes, y_is_odd: Choice) -> CtOption<AffinePoint> {
        AffinePoint::decompress(x, y_is_odd)
    }
}

/// BIGN P-384 field element serialized as bytes (big-endian).
pub type FieldBytes = elliptic_curve::FieldBytes<BignP384>;

/// BIGN P-384 elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<BignP384>;

/// BIGN P-384 elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<BignP384>;

/// Non-zero scalar modulo the BIGN P-384 group order.
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<BignP384>;

/// BIGN P-384 public key.
pub type PublicKey = crate::PublicKey<BignP384>;

/// BIGN P-384 signature.
pub type Signature = crate::dsa::Signature<BignP384>;

/// BIGN P-384 signing key.
pub type SigningKey = crate::dsa::SigningKey<BignP384>;

/// BIGN P-384 verifying key.
pub type VerifyingKey = crate::dsa::VerifyingKey<BignP384>;

#[cfg(test)]
mod tests {
    use super::{AffinePoint, BignP384, FieldBytes, ProjectivePoint, Scalar};
    use crate::BignCurve;
    use elliptic_curve::{group::Group, ops::MulByGenerator, subtle::Choice};

    #[test]
    fn generator_is_on_curve() {
        let g = BignP384::decompress(&FieldBytes::default(), Choice::from(1)).unwrap();
        assert_eq!(g, AffinePoint::GENERATOR);
    }

    #[test]
    fn order_annihilates_generator() {
        let p = ProjectivePoint::mul_by_generator(&-Scalar::ONE) + ProjectivePoint::GENERATOR;
        assert!(bool::from(p.is_identity()));
    }
}
