//! Support for computing Bign signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1. Set 𝐻 ← ℎ(𝑋).
//! 2. Generate 𝑘 ← genk(𝑑, 𝐻) or 𝑘 ← rand(1,..,𝑞-1).
//! 3. Set 𝑅 ← 𝑘𝐺.
//! 4. Set 𝑆0 ← ⟨︀belt-hash(OID(ℎ) ‖ ⟨𝑅⟩2𝑙 ‖ 𝐻)⟩︀_𝑙.
//! 5. Set 𝑆1 ← ⟨︀(𝑘 − 𝐻 − (𝑆0 + 2^𝑙)𝑑) mod 𝑞⟩︀_2𝑙.
//! 6. Set 𝑆 ← 𝑆0 ‖ 𝑆1.
//! 7. Return S.
//! ```

use super::{sign_with_scalar, SignMode, SignOptions, Signature, VerifyingKey};
use crate::{
    hazmat::{private_key_from_le_bytes, scalar_to_le_bytes},
    BeltEngine, BignCurve, DigestEngine, PublicKey, Result,
};
use core::fmt::{self, Debug};
use elliptic_curve::{
    subtle::{Choice, ConstantTimeEq},
    FieldBytes, NonZeroScalar,
};
use rand_core::CryptoRngCore;
use signature::{
    hazmat::{PrehashSigner, RandomizedPrehashSigner},
    KeypairRef, RandomizedSigner, Signer,
};

/// Bign private key used for signing messages and producing signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`Signer`]: sign a message using this key, with a deterministic one-time key
/// - [`RandomizedSigner`]: sign a message using this key, with a random one-time key
/// - [`PrehashSigner`]: sign the low-level raw output bytes of a message digest
/// - [`RandomizedPrehashSigner`]: same as above, with a random one-time key
#[derive(Clone)]
pub struct SigningKey<C: BignCurve> {
    /// Private scalar `d`.
    secret_scalar: NonZeroScalar<C>,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey<C>,
}

impl<C: BignCurve> SigningKey<C> {
    /// Generate a random signing key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        Self::from_nonzero_scalar(NonZeroScalar::random(rng))
    }

    /// Parse a signing key from a little-endian private key of exactly
    /// `length` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_nonzero_scalar(private_key_from_le_bytes::<C>(bytes)?)
    }

    /// Create a signing key from a non-zero scalar.
    pub fn from_nonzero_scalar(secret_scalar: NonZeroScalar<C>) -> Result<Self> {
        let public_key = PublicKey::from_secret_scalar(&secret_scalar)?;
        Ok(Self {
            secret_scalar,
            verifying_key: VerifyingKey::new(public_key),
        })
    }

    /// Serialize the private key as `length` little-endian bytes.
    pub fn to_bytes(&self) -> FieldBytes<C> {
        scalar_to_le_bytes::<C>(&self.secret_scalar)
    }

    /// Borrow the secret [`NonZeroScalar`] value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_nonzero_scalar(&self) -> &NonZeroScalar<C> {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<C> {
        &self.verifying_key
    }

    /// Sign a digest with explicit [`SignOptions`].
    ///
    /// `rng` is only used in [`SignMode::Default`] without a caller-supplied
    /// one-time key.
    pub fn sign_prehash_with_options(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
        options: &SignOptions<'_>,
    ) -> Result<Signature<C>> {
        let rng: &mut dyn CryptoRngCore = rng;
        sign_with_scalar(Some(rng), &self.secret_scalar, prehash, options)
    }
}

//
// `*Signer` trait impls
//

impl<C: BignCurve> PrehashSigner<Signature<C>> for SigningKey<C> {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature<C>> {
        Ok(sign_with_scalar(
            None,
            &self.secret_scalar,
            prehash,
            &SignOptions::new(),
        )?)
    }
}

impl<C: BignCurve> RandomizedPrehashSigner<Signature<C>> for SigningKey<C> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature<C>> {
        let options = SignOptions::new().with_mode(SignMode::Default);
        Ok(self.sign_prehash_with_options(rng, prehash, &options)?)
    }
}

impl<C: BignCurve> Signer<Signature<C>> for SigningKey<C> {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature<C>> {
        // 1. Set 𝐻 ← ℎ(𝑋).
        self.sign_prehash(&BeltEngine::hash(&[msg]))
    }
}

impl<C: BignCurve> RandomizedSigner<Signature<C>> for SigningKey<C> {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature<C>> {
        self.sign_prehash_with_rng(rng, &BeltEngine::hash(&[msg]))
    }
}

//
// Other trait impls
//

impl<C: BignCurve> AsRef<VerifyingKey<C>> for SigningKey<C> {
    fn as_ref(&self) -> &VerifyingKey<C> {
        &self.verifying_key
    }
}

impl<C: BignCurve> ConstantTimeEq for SigningKey<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_scalar.ct_eq(&other.secret_scalar)
    }
}

impl<C: BignCurve> Debug for SigningKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl<C: BignCurve> Eq for SigningKey<C> {}
impl<C: BignCurve> PartialEq for SigningKey<C> {
    fn eq(&self, other: &SigningKey<C>) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: BignCurve> KeypairRef for SigningKey<C> {
    type VerifyingKey = VerifyingKey<C>;
}

impl<C: BignCurve> TryFrom<&[u8]> for SigningKey<C> {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Ok(Self::from_bytes(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{bignp256::SigningKey, Error};
    use hex_literal::hex;

    const D: [u8; 32] = hex!("1F66B5B84B7339674533F0329C74F21834281FED0732429E0C79235FC273E269");

    #[test]
    fn private_key_round_trip() {
        let key = SigningKey::from_bytes(&D).unwrap();
        assert_eq!(key.to_bytes().as_slice(), &D);
    }

    #[test]
    fn private_key_range_is_checked() {
        assert_eq!(SigningKey::from_bytes(&[0u8; 32]), Err(Error::InvalidPrivateKey));
        assert_eq!(SigningKey::from_bytes(&D[..31]), Err(Error::InvalidPrivateKey));
        assert_eq!(SigningKey::from_bytes(&[0xFF; 32]), Err(Error::InvalidPrivateKey));
    }

    #[test]
    fn debug_hides_secret() {
        let key = SigningKey::from_bytes(&D).unwrap();
        let mut buf = [0u8; 1024];
        let mut w = Cursor(&mut buf, 0);
        core::fmt::write(&mut w, format_args!("{:?}", key)).unwrap();
        let s = core::str::from_utf8(&w.0[..w.1]).unwrap();
        assert!(s.starts_with("SigningKey"));
        assert!(!s.contains("secret_scalar"));
    }

    struct Cursor<'a>(&'a mut [u8], usize);

    impl core::fmt::Write for Cursor<'_> {
        fn write_str(&mut self, s: &str) -> core::fmt::Result {
            let end = (self.1 + s.len()).min(self.0.len());
            self.0[self.1..end].copy_from_slice(&s.as_bytes()[..end - self.1]);
            self.1 = end;
            Ok(())
        }
    }
}
