//! Public key types and traits

use crate::{
    arithmetic::{affine_from_coordinates, affine_y},
    BignCurve, Error, Result,
};
use elliptic_curve::{
    generic_array::{typenum::Unsigned, GenericArray},
    group::Group,
    point::AffineCoordinates,
    AffinePoint, FieldBytes, FieldBytesSize, NonZeroScalar, PrimeField, ProjectivePoint,
};

/// Tag byte of an uncompressed point encoding.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Bign public key: a non-identity point `Q = d · G` on the curve `C`.
///
/// Encoded as `0x04 ‖ x ‖ y` with both coordinates little-endian.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey<C: BignCurve> {
    point: AffinePoint<C>,
    encoded: GenericArray<u8, C::PublicKeySize>,
}

impl<C: BignCurve> PublicKey<C> {
    /// Convert an [`AffinePoint`] into a [`PublicKey`]
    pub fn from_affine(point: AffinePoint<C>) -> Result<Self> {
        if bool::from(ProjectivePoint::<C>::from(point).is_identity()) {
            return Err(Error::InvalidPoint);
        }

        let y = Option::<C::FieldElement>::from(affine_y::<C>(&point))
            .ok_or(Error::InvalidPoint)?;
        let len = FieldBytesSize::<C>::USIZE;
        let mut encoded = GenericArray::<u8, C::PublicKeySize>::default();
        encoded[0] = UNCOMPRESSED_TAG;
        encoded[1..=len].copy_from_slice(&point.x());
        encoded[1..=len].reverse();
        encoded[len + 1..].copy_from_slice(&y.to_repr());
        encoded[len + 1..].reverse();

        Ok(Self { point, encoded })
    }

    /// Compute a [`PublicKey`] from a secret [`NonZeroScalar`] value
    /// (i.e. a secret key represented as a raw scalar value)
    pub fn from_secret_scalar(scalar: &NonZeroScalar<C>) -> Result<Self> {
        Self::from_affine((ProjectivePoint::<C>::generator() * scalar.as_ref()).to_affine())
    }

    /// Decode a public key from `0x04 ‖ LE(x) ‖ LE(y)`.
    ///
    /// Fails with [`Error::InvalidPoint`] on a wrong length or tag, on
    /// coordinates outside the base field, or on a point off the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = FieldBytesSize::<C>::USIZE;
        if bytes.len() != C::PublicKeySize::USIZE || bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::InvalidPoint);
        }

        let mut x = FieldBytes::<C>::clone_from_slice(&bytes[1..=len]);
        let mut y = FieldBytes::<C>::clone_from_slice(&bytes[len + 1..]);
        x.reverse();
        y.reverse();

        let point =
            Option::from(affine_from_coordinates::<C>(&x, &y)).ok_or(Error::InvalidPoint)?;
        Self::from_affine(point)
    }

    /// Borrow the inner [`AffinePoint`] from this [`PublicKey`].
    pub fn as_affine(&self) -> &AffinePoint<C> {
        &self.point
    }

    /// Convert this [`PublicKey`] to a [`ProjectivePoint`] for the given curve
    pub fn to_projective(&self) -> ProjectivePoint<C> {
        self.point.into()
    }

    /// Borrow the uncompressed little-endian encoding of this key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Uncompressed little-endian encoding of this key.
    pub fn to_bytes(&self) -> GenericArray<u8, C::PublicKeySize> {
        self.encoded.clone()
    }
}

impl<C: BignCurve> AsRef<AffinePoint<C>> for PublicKey<C> {
    fn as_ref(&self) -> &AffinePoint<C> {
        self.as_affine()
    }
}

impl<C: BignCurve> TryFrom<&[u8]> for PublicKey<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::{bignp256, BignP256, Error, PublicKey};
    use elliptic_curve::{ops::MulByGenerator, NonZeroScalar};
    use hex_literal::hex;

    #[test]
    fn encode_generator() {
        let one = NonZeroScalar::<BignP256>::new(bignp256::Scalar::ONE).unwrap();
        let pk = PublicKey::from_secret_scalar(&one).unwrap();
        assert_eq!(
            pk.as_bytes(),
            hex!(
                "04"
                "0000000000000000000000000000000000000000000000000000000000000000"
                "936A510418CF291E52F608C4663991785D83D651A3C9E45C9FD616FB3CFCF76B"
            )
        );
        assert_eq!(PublicKey::<BignP256>::from_bytes(pk.as_bytes()).unwrap(), pk);
    }

    #[test]
    fn identity_is_rejected() {
        let identity = bignp256::ProjectivePoint::mul_by_generator(&bignp256::Scalar::ZERO);
        assert_eq!(
            PublicKey::<BignP256>::from_affine(identity.into()),
            Err(Error::InvalidPoint)
        );
    }
}
