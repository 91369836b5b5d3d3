//! Bign Digital Signature Algorithm as defined in [STB 34.101.45-2013 § 7].
//!
//! Two APIs are provided:
//!
//! - byte-level functions ([`get_public_key`], [`generate_k`], [`sign`],
//!   [`sign_with_rng`], [`verify`]) taking keys, digests and signatures as
//!   little-endian byte strings and selected by curve type;
//! - [`SigningKey`] and [`VerifyingKey`] implementing the traits of the
//!   [`signature`] crate.
//!
//! ## Usage
//!
//! NOTE: random signing requires the `getrandom` crate feature.
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use bign::{
//!     bignp256::{Signature, SigningKey},
//!     signature::{Signer, Verifier},
//! };
//!
//! // Signing
//! let private_key = [0x42; 32]; // little-endian, in [1, n - 1]
//! let signing_key = SigningKey::from_bytes(&private_key)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_bytes();
//! let message = b"test message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verifying
//! use bign::bignp256::VerifyingKey;
//!
//! let verifying_key = VerifyingKey::from_bytes(&verifying_key_bytes)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! [STB 34.101.45-2013 § 7]: https://apmi.bsu.by/assets/files/std/bign-spec294.pdf

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{
    hazmat::{self, private_key_from_le_bytes, scalar_from_le_bytes, scalar_to_le_bytes},
    BeltEngine, BignCurve, Error, PublicKey, Result, BELT_OID,
};
use core::fmt::{self, Debug};
use elliptic_curve::{
    generic_array::{typenum::Unsigned, GenericArray},
    FieldBytes, NonZeroScalar,
};
use rand_core::CryptoRngCore;
use signature::SignatureEncoding;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// Bign signature serialized as bytes: `S0 ‖ S1`.
pub type SignatureBytes<C> = GenericArray<u8, <C as BignCurve>::SignatureSize>;

/// Uncompressed public key serialized as bytes: `0x04 ‖ x ‖ y`.
pub type PublicKeyBytes<C> = GenericArray<u8, <C as BignCurve>::PublicKeySize>;

/// Source of the one-time key when the caller does not supply one.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SignMode {
    /// Draw `length` bytes from a random number generator.
    Default,

    /// Derive the key from the private key and digest with [`generate_k`].
    #[default]
    Deterministic,
}

/// Per-call signing parameters.
///
/// Every field is optional: the hash identifier defaults to [`BELT_OID`],
/// the mode to [`SignMode::Deterministic`] and the context vector to the
/// empty string. A caller-supplied one-time key `k` overrides the mode.
#[derive(Copy, Clone, Default)]
pub struct SignOptions<'a> {
    /// DER-encoded identifier of the hash that produced the digest.
    pub oid: Option<&'a [u8]>,

    /// How to obtain the one-time key.
    pub mode: SignMode,

    /// Little-endian one-time key of at most `length` bytes.
    pub k: Option<&'a [u8]>,

    /// Context vector `t` mixed into deterministic key generation.
    pub context: Option<&'a [u8]>,
}

impl<'a> SignOptions<'a> {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hash identifier.
    pub fn with_oid(mut self, oid: &'a [u8]) -> Self {
        self.oid = Some(oid);
        self
    }

    /// Set the one-time key mode.
    pub fn with_mode(mut self, mode: SignMode) -> Self {
        self.mode = mode;
        self
    }

    /// Supply the one-time key directly.
    pub fn with_k(mut self, k: &'a [u8]) -> Self {
        self.k = Some(k);
        self
    }

    /// Set the context vector of deterministic key generation.
    pub fn with_context(mut self, context: &'a [u8]) -> Self {
        self.context = Some(context);
        self
    }

    fn oid(&self) -> &'a [u8] {
        self.oid.unwrap_or(&BELT_OID)
    }
}

impl Debug for SignOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignOptions")
            .field("oid", &self.oid)
            .field("mode", &self.mode)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Per-call verification parameters.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct VerifyOptions<'a> {
    /// DER-encoded identifier of the hash that produced the digest.
    /// Defaults to [`BELT_OID`].
    pub oid: Option<&'a [u8]>,
}

impl<'a> VerifyOptions<'a> {
    /// Options with the default hash identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hash identifier.
    pub fn with_oid(mut self, oid: &'a [u8]) -> Self {
        self.oid = Some(oid);
        self
    }

    fn oid(&self) -> &'a [u8] {
        self.oid.unwrap_or(&BELT_OID)
    }
}

/// Bign signature `S0 ‖ S1`.
///
/// `S0` is a truncated hash of `length / 2` bytes, `S1` a little-endian
/// integer of `length` bytes. Parsing only checks the length: the range of
/// `S1` is checked by verification.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature<C: BignCurve> {
    s0: GenericArray<u8, C::HalfSize>,
    s1: FieldBytes<C>,
}

impl<C: BignCurve> Signature<C> {
    /// Size of an encoded signature in bytes.
    pub const BYTE_SIZE: usize = C::SignatureSize::USIZE;

    pub(crate) fn from_parts(s0: GenericArray<u8, C::HalfSize>, s1: FieldBytes<C>) -> Self {
        Self { s0, s1 }
    }

    /// Parse a signature from a byte array.
    pub fn from_bytes(bytes: &SignatureBytes<C>) -> Self {
        let (s0, s1) = bytes.split_at(C::HalfSize::USIZE);
        Self {
            s0: GenericArray::clone_from_slice(s0),
            s1: GenericArray::clone_from_slice(s1),
        }
    }

    /// Parse a signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::InvalidSignature);
        }
        Ok(Self::from_bytes(GenericArray::from_slice(bytes)))
    }

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> SignatureBytes<C> {
        let mut ret = SignatureBytes::<C>::default();
        let (s0, s1) = ret.split_at_mut(C::HalfSize::USIZE);
        s0.copy_from_slice(&self.s0);
        s1.copy_from_slice(&self.s1);
        ret
    }

    /// Bytes of the `S0` hash half.
    pub fn s0(&self) -> &GenericArray<u8, C::HalfSize> {
        &self.s0
    }

    /// Little-endian bytes of the `S1` integer.
    pub fn s1_bytes(&self) -> &FieldBytes<C> {
        &self.s1
    }

    /// Convert this signature into a byte vector.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl<C: BignCurve> Debug for Signature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bign::dsa::Signature<{:?}>(", C::default())?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl<C: BignCurve> From<Signature<C>> for GenericArray<u8, C::SignatureSize> {
    fn from(signature: Signature<C>) -> Self {
        signature.to_bytes()
    }
}

impl<C: BignCurve> SignatureEncoding for Signature<C> {
    type Repr = SignatureBytes<C>;

    fn to_bytes(&self) -> Self::Repr {
        Signature::to_bytes(self)
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl<C: BignCurve> TryFrom<&[u8]> for Signature<C> {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Ok(Self::from_slice(bytes)?)
    }
}

/// Compute the public key `0x04 ‖ LE(x) ‖ LE(y)` of a little-endian private
/// key of exactly `length` bytes.
pub fn get_public_key<C: BignCurve>(private_key: &[u8]) -> Result<PublicKeyBytes<C>> {
    let d = private_key_from_le_bytes::<C>(private_key)?;
    Ok(PublicKey::<C>::from_secret_scalar(&d)?.to_bytes())
}

/// Deterministically generate the one-time key for `private_key` and
/// `digest`, big-endian in `length` bytes.
///
/// `oid` identifies the hash that produced `digest` and `context` is the
/// optional vector `t`; pass [`BELT_OID`] and an empty slice for the
/// defaults. See [`hazmat::generate_k`].
pub fn generate_k<C: BignCurve>(
    private_key: &[u8],
    digest: &[u8],
    oid: &[u8],
    context: &[u8],
) -> Result<FieldBytes<C>> {
    hazmat::generate_k::<C, BeltEngine>(private_key, digest, oid, context)
}

/// Sign `digest` with a little-endian private key, drawing random one-time
/// keys from the operating system when [`SignMode::Default`] is selected.
#[cfg(feature = "getrandom")]
pub fn sign<C: BignCurve>(
    private_key: &[u8],
    digest: &[u8],
    options: &SignOptions<'_>,
) -> Result<SignatureBytes<C>> {
    sign_with_rng::<C>(&mut OsRng, private_key, digest, options)
}

/// Sign `digest` with a little-endian private key.
///
/// `rng` is only consulted in [`SignMode::Default`] without a caller-supplied
/// one-time key. A one-time key that decodes (little-endian) to zero or to a
/// value not below `n` fails with [`Error::InvalidNonce`].
pub fn sign_with_rng<C: BignCurve>(
    rng: &mut impl CryptoRngCore,
    private_key: &[u8],
    digest: &[u8],
    options: &SignOptions<'_>,
) -> Result<SignatureBytes<C>> {
    let d = private_key_from_le_bytes::<C>(private_key)?;
    let rng: &mut dyn CryptoRngCore = rng;
    Ok(sign_with_scalar::<C>(Some(rng), &d, digest, options)?.to_bytes())
}

/// Sign with a decoded private key.
///
/// `rng` may only be `None` when `options` never asks for a random one-time
/// key; otherwise signing fails with [`Error::InvalidNonce`].
pub(crate) fn sign_with_scalar<C: BignCurve>(
    rng: Option<&mut dyn CryptoRngCore>,
    d: &NonZeroScalar<C>,
    digest: &[u8],
    options: &SignOptions<'_>,
) -> Result<Signature<C>> {
    let oid = options.oid();

    let k = match (options.k, options.mode, rng) {
        (Some(k), _, _) => scalar_from_le_bytes::<C>(k),
        (None, SignMode::Deterministic, _) => {
            let private_key = scalar_to_le_bytes::<C>(d);
            let context = options.context.unwrap_or(&[]);
            let k = generate_k::<C>(&private_key, digest, oid, context)?;
            scalar_from_le_bytes::<C>(&k)
        }
        (None, SignMode::Default, Some(rng)) => {
            let mut k = FieldBytes::<C>::default();
            rng.fill_bytes(&mut k);
            scalar_from_le_bytes::<C>(&k)
        }
        (None, SignMode::Default, None) => return Err(Error::InvalidNonce),
    };
    let k = Option::from(k.and_then(NonZeroScalar::new)).ok_or(Error::InvalidNonce)?;

    Ok(hazmat::sign_prehashed::<C, BeltEngine>(d, &k, digest, oid))
}

/// Verify `signature` over `digest` with an encoded public key.
///
/// Returns `Ok(false)` for a signature of the wrong length, with `S1` out of
/// range, or that does not match. A malformed public key is
/// [`Error::InvalidPoint`].
pub fn verify<C: BignCurve>(
    public_key: &[u8],
    digest: &[u8],
    signature: &[u8],
    options: &VerifyOptions<'_>,
) -> Result<bool> {
    let signature = match Signature::<C>::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => {
            debug!("signature rejected: wrong length");
            return Ok(false);
        }
    };

    // `S1` is range checked again by `verify_prehashed`; this check must
    // come before the public key is decoded.
    if bool::from(scalar_from_le_bytes::<C>(signature.s1_bytes()).is_none()) {
        debug!("signature rejected: S1 out of range");
        return Ok(false);
    }

    let q = PublicKey::<C>::from_bytes(public_key)?;
    Ok(hazmat::verify_prehashed::<C, BeltEngine>(
        &q.to_projective(),
        digest,
        options.oid(),
        &signature,
    ))
}
