//! Support for verifying Bign signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. If |𝑆| != 3𝑙, return NO.
//! 2. Assume 𝑆 as 𝑆 = 𝑆0 ‖ 𝑆1, where 𝑆0 ∈ {0, 1}^𝑙, 𝑆1 ∈ {0, 1}^2𝑙.
//! 3. If 𝑆1 ⩾ 𝑞, return NO.
//! 4. Set 𝐻 ← ℎ(𝑋).
//! 5. Set 𝑅 ← (︀(𝑆1 + 𝐻) mod 𝑞)︀𝐺 + (𝑆0 + 2𝑙)𝑄.
//! 6. If 𝑅 = 𝑂, return NO.
//! 7. Set 𝑡 ← ⟨︀belt-hash(OID(ℎ) ‖ ⟨𝑅⟩^2𝑙 ‖ 𝐻) ⟩︀^𝑙.
//! 8. If 𝑆0 != 𝑡, return NO.
//! 9. Return YES.
//! ```
//!
//! Steps 1 and 2 happen when the [`Signature`] is parsed.

use super::{PublicKeyBytes, Signature, VerifyOptions};
use crate::{hazmat, BeltEngine, BignCurve, DigestEngine, PublicKey, Result};
use elliptic_curve::AffinePoint;
use signature::{hazmat::PrehashVerifier, Error, Verifier};

/// Bign public key used for verifying signatures are valid for a given
/// message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<C: BignCurve> {
    /// Signer's public key.
    public_key: PublicKey<C>,
}

impl<C: BignCurve> VerifyingKey<C> {
    /// Initialize [`VerifyingKey`] from a signer's public key.
    pub fn new(public_key: PublicKey<C>) -> Self {
        Self { public_key }
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns [`Error::InvalidPoint`](crate::Error::InvalidPoint) if the
    /// given affine point is the additive identity (a.k.a. point at infinity).
    pub fn from_affine(affine: AffinePoint<C>) -> Result<Self> {
        PublicKey::from_affine(affine).map(Self::new)
    }

    /// Initialize [`VerifyingKey`] from an encoded public key
    /// `0x04 ‖ LE(x) ‖ LE(y)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_bytes(bytes).map(Self::new)
    }

    /// Serialize this key as `0x04 ‖ LE(x) ‖ LE(y)`.
    pub fn to_bytes(&self) -> PublicKeyBytes<C> {
        self.public_key.to_bytes()
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint<C> {
        self.public_key.as_affine()
    }

    /// Borrow the inner [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Verify a signature over a digest produced by the hash identified in
    /// `options`.
    pub fn verify_prehash_with_options(
        &self,
        prehash: &[u8],
        signature: &Signature<C>,
        options: &VerifyOptions<'_>,
    ) -> bool {
        hazmat::verify_prehashed::<C, BeltEngine>(
            &self.public_key.to_projective(),
            prehash,
            options.oid(),
            signature,
        )
    }
}

//
// `*Verifier` trait impls
//

impl<C: BignCurve> PrehashVerifier<Signature<C>> for VerifyingKey<C> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature<C>) -> signature::Result<()> {
        if self.verify_prehash_with_options(prehash, signature, &VerifyOptions::new()) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

impl<C: BignCurve> Verifier<Signature<C>> for VerifyingKey<C> {
    fn verify(&self, msg: &[u8], signature: &Signature<C>) -> signature::Result<()> {
        // 4. Set 𝐻 ← ℎ(𝑋).
        self.verify_prehash(&BeltEngine::hash(&[msg]), signature)
    }
}

//
// Other trait impls
//

impl<C: BignCurve> AsRef<AffinePoint<C>> for VerifyingKey<C> {
    fn as_ref(&self) -> &AffinePoint<C> {
        self.as_affine()
    }
}

impl<C: BignCurve> From<PublicKey<C>> for VerifyingKey<C> {
    fn from(public_key: PublicKey<C>) -> VerifyingKey<C> {
        Self::new(public_key)
    }
}

impl<C: BignCurve> From<VerifyingKey<C>> for PublicKey<C> {
    fn from(verifying_key: VerifyingKey<C>) -> PublicKey<C> {
        verifying_key.public_key
    }
}

impl<C: BignCurve> TryFrom<&[u8]> for VerifyingKey<C> {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Ok(Self::from_bytes(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bignp256::{Signature, VerifyingKey},
        dsa, BignCurve, BignP256, BignP384, BignP512, GenericArray,
    };
    use hex_literal::hex;
    use signature::{hazmat::PrehashVerifier, Verifier};

    const PUBLIC_KEY: [u8; 65] = hex!(
        "04"
        "BD1A5650179D79E03FCEE49D4C2BD5DDF54CE46D0CF11E4FF87BF7A890857FD0"
        "7AC6A60361E8C8173491686D461B2826190C2EDA5909054A9AB84D2AB9D99A90"
    );

    const MESSAGE: [u8; 48] = hex!(
        "B194BAC8 0A08F53B 366D008E 584A5DE4"
        "8504FA9D 1BB6C7AC 252E72C2 02FDCE0D"
        "5BE3D612 17B96181 FE6786AD 716B890B"
    );

    const SIG: [u8; 48] = hex!(
        "47A63C8B 9C936E94 B5FAB3D9 CBD78366"
        "290F3210 E163EEC8 DB4E921E 8479D413"
        "8F112CC2 3E6DCE65 EC5FF21D F4231C28"
    );

    #[test]
    fn verify_message() {
        let key = VerifyingKey::from_bytes(&PUBLIC_KEY).unwrap();
        let sig = Signature::from_slice(&SIG).unwrap();
        assert!(key.verify(&MESSAGE, &sig).is_ok());
        assert!(key.verify(&MESSAGE[..13], &sig).is_err());
    }

    #[test]
    fn prehash_must_match() {
        let key = VerifyingKey::from_bytes(&PUBLIC_KEY).unwrap();
        let sig = Signature::from_slice(&SIG).unwrap();
        assert!(key.verify_prehash(&MESSAGE[..32], &sig).is_err());
    }

    #[test]
    fn encoding_round_trip() {
        let key = VerifyingKey::from_bytes(&PUBLIC_KEY).unwrap();
        assert_eq!(key.to_bytes().as_slice(), &PUBLIC_KEY);
    }

    fn generic_key_equality<C: BignCurve>(seed: u8) {
        let mut bytes = GenericArray::<u8, elliptic_curve::FieldBytesSize<C>>::default();
        bytes[0] = seed;
        let key = dsa::SigningKey::<C>::from_bytes(&bytes).unwrap();
        let vk: &dsa::VerifyingKey<C> = key.verifying_key();
        let decoded = dsa::VerifyingKey::<C>::from_bytes(&vk.to_bytes()).unwrap();
        assert_eq!(&decoded, vk);
        assert_eq!(decoded.as_public_key(), vk.as_public_key());

        bytes[0] = seed + 1;
        let other = dsa::SigningKey::<C>::from_bytes(&bytes).unwrap();
        assert_ne!(other.verifying_key(), vk);
    }

    #[test]
    fn keys_compare_on_every_curve() {
        generic_key_equality::<BignP256>(7);
        generic_key_equality::<BignP384>(7);
        generic_key_equality::<BignP512>(7);
    }
}
