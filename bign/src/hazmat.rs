//! Low-level Bign signature primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces intended to be
//! composed with a [`DigestEngine`] other than belt, or with one-time keys
//! and digests produced elsewhere. If you are an end user, please use the
//! [`dsa`](crate::dsa) module instead.
//!
//! All integers crossing this interface are little-endian, except for the
//! output of [`generate_k`] which is big-endian.

use crate::{dsa::Signature, BignCurve, DigestEngine, Error, Result};
use elliptic_curve::{
    generic_array::{typenum::Unsigned, GenericArray},
    group::Group,
    ops::{LinearCombination, MulByGenerator},
    point::AffineCoordinates,
    subtle::{ConstantTimeEq, CtOption},
    Field, FieldBytes, FieldBytesSize, NonZeroScalar, PrimeField, ProjectivePoint, Scalar,
};

/// Smallest digest the one-time key generator accepts: two cipher blocks.
pub const MIN_DIGEST_SIZE: usize = 32;

/// Decode a little-endian integer of at most `length` bytes into a scalar.
///
/// The result is none when the integer is not below `n`, or when `bytes` is
/// longer than the curve's scalar encoding.
pub fn scalar_from_le_bytes<C: BignCurve>(bytes: &[u8]) -> CtOption<Scalar<C>> {
    let mut repr = FieldBytes::<C>::default();
    let len = FieldBytesSize::<C>::USIZE;
    if bytes.len() > len {
        return CtOption::new(Scalar::<C>::ZERO, 0.into());
    }

    repr[len - bytes.len()..].copy_from_slice(bytes);
    repr[len - bytes.len()..].reverse();
    Scalar::<C>::from_repr(repr)
}

/// Encode a scalar as `length` little-endian bytes.
pub fn scalar_to_le_bytes<C: BignCurve>(scalar: &Scalar<C>) -> FieldBytes<C> {
    let mut repr = scalar.to_repr();
    repr.reverse();
    repr
}

/// Decode a little-endian private key of exactly `length` bytes.
pub fn private_key_from_le_bytes<C: BignCurve>(bytes: &[u8]) -> Result<NonZeroScalar<C>> {
    if bytes.len() != FieldBytesSize::<C>::USIZE {
        return Err(Error::InvalidPrivateKey);
    }

    Option::from(scalar_from_le_bytes::<C>(bytes).and_then(NonZeroScalar::new))
        .ok_or(Error::InvalidPrivateKey)
}

/// Reduce a little-endian digest of any length modulo `n`.
pub fn reduce_digest<C: BignCurve>(digest: &[u8]) -> Scalar<C> {
    let radix = Scalar::<C>::from(256u64);
    digest
        .iter()
        .rev()
        .fold(Scalar::<C>::ZERO, |acc, &byte| {
            acc * radix + Scalar::<C>::from(u64::from(byte))
        })
}

/// Compute `S0 + 2^l` where `S0` is the little-endian hash half of a
/// signature and `l` its bit length.
fn offset_hash_half<C: BignCurve>(s0: &GenericArray<u8, C::HalfSize>) -> Scalar<C> {
    let half = C::HalfSize::USIZE;
    let mut repr = FieldBytes::<C>::default();
    repr[..half].copy_from_slice(s0);
    repr[half] = 1;
    repr.reverse();

    // `2^(l + 1)` is below `n` on every Bign curve.
    Option::from(Scalar::<C>::from_repr(repr)).unwrap_or(Scalar::<C>::ZERO)
}

/// Truncated hash `h(oid ‖ LE(x) ‖ digest)` shared by signing and verification.
fn hash_half<C: BignCurve, D: DigestEngine>(
    oid: &[u8],
    point: &ProjectivePoint<C>,
    digest: &[u8],
) -> GenericArray<u8, C::HalfSize> {
    let mut x = point.to_affine().x();
    x.reverse();

    let hash = D::hash(&[oid, &x, digest]);
    GenericArray::clone_from_slice(&hash[..C::HalfSize::USIZE])
}

/// Deterministically generate the one-time key for `prv` and `digest`.
///
/// Returns the key big-endian in `length` bytes. The generator loops until
/// the stretched candidate falls in `[1, n - 1]`; see [`generate_k_bounded`]
/// for a variant with an iteration cap.
///
/// ## Algorithm
///
/// ```text
/// 1. Set θ ← h(OID(h) ‖ d ‖ t).
/// 2. Set r ← H.
/// 3. Set r ← belt-wblock(r, θ).
/// 4. If r ∉ {1, 2, ..., q − 1}, go to 3.
/// 5. Return k ← r.
/// ```
pub fn generate_k<C: BignCurve, D: DigestEngine>(
    prv: &[u8],
    digest: &[u8],
    oid: &[u8],
    context: &[u8],
) -> Result<FieldBytes<C>> {
    generate_k_inner::<C, D>(prv, digest, oid, context, None)
}

/// Same as [`generate_k`], but gives up with [`Error::NonceExhausted`] after
/// `max_iterations` stretches.
pub fn generate_k_bounded<C: BignCurve, D: DigestEngine>(
    prv: &[u8],
    digest: &[u8],
    oid: &[u8],
    context: &[u8],
    max_iterations: usize,
) -> Result<FieldBytes<C>> {
    generate_k_inner::<C, D>(prv, digest, oid, context, Some(max_iterations))
}

fn generate_k_inner<C: BignCurve, D: DigestEngine>(
    prv: &[u8],
    digest: &[u8],
    oid: &[u8],
    context: &[u8],
    max_iterations: Option<usize>,
) -> Result<FieldBytes<C>> {
    let len = FieldBytesSize::<C>::USIZE;
    if digest.len() < MIN_DIGEST_SIZE || digest.len() > len {
        return Err(Error::InvalidDigest);
    }

    // 1. Set θ ← h(OID(h) ‖ d ‖ t).
    let theta = D::hash(&[oid, prv, context]);

    // 2. Set r ← H.
    let start = len - digest.len();
    let mut candidate = FieldBytes::<C>::default();
    candidate[start..].copy_from_slice(digest);

    let mut iterations = 0usize;
    loop {
        if max_iterations.map_or(false, |max| iterations >= max) {
            debug!(iterations, "one-time key generation exhausted");
            return Err(Error::NonceExhausted);
        }
        iterations += 1;

        // 3. Set r ← belt-wblock(r, θ).
        D::stretch(&theta, &mut candidate[start..])?;

        // 4. If r ∉ {1, 2, ..., q − 1}, go to 3.
        let k = NonZeroScalar::<C>::from_repr(candidate.clone());
        if bool::from(k.is_some()) {
            trace!(iterations, "one-time key accepted");
            return Ok(candidate);
        }
        trace!(iterations, "one-time key candidate rejected");
    }
}

/// Sign a digest with the private key `d` and the one-time key `k`.
///
/// `k` must be freshly generated for this digest: reusing it across digests
/// reveals `d`.
///
/// ## Algorithm
///
/// ```text
/// 1. Set R ← kG.
/// 2. Set S0 ← ⟨h(OID(h) ‖ ⟨R⟩_2l ‖ H)⟩_l.
/// 3. Set S1 ← ⟨(k − H − (S0 + 2^l)d) mod q⟩_2l.
/// 4. Return S ← S0 ‖ S1.
/// ```
pub fn sign_prehashed<C: BignCurve, D: DigestEngine>(
    d: &NonZeroScalar<C>,
    k: &NonZeroScalar<C>,
    digest: &[u8],
    oid: &[u8],
) -> Signature<C> {
    // 1. Set R ← kG.
    let r = ProjectivePoint::<C>::mul_by_generator(k.as_ref());

    // 2. Set S0 ← ⟨h(OID(h) ‖ ⟨R⟩_2l ‖ H)⟩_l.
    let s0 = hash_half::<C, D>(oid, &r, digest);

    // 3. Set S1 ← ⟨(k − H − (S0 + 2^l)d) mod q⟩_2l.
    let e = reduce_digest::<C>(digest);
    let s1 = *k.as_ref() - e - offset_hash_half::<C>(&s0) * d.as_ref();

    // 4. Return S ← S0 ‖ S1.
    Signature::from_parts(s0, scalar_to_le_bytes::<C>(&s1))
}

/// Verify a signature over a digest with the public point `q`.
///
/// ## Algorithm
///
/// ```text
/// 1. If S1 ⩾ q, return NO.
/// 2. Set R ← ((S1 + H) mod q)G + (S0 + 2^l)Q.
/// 3. If R = O, return NO.
/// 4. Set t ← ⟨h(OID(h) ‖ ⟨R⟩_2l ‖ H)⟩_l.
/// 5. Return YES if S0 = t, NO otherwise.
/// ```
pub fn verify_prehashed<C: BignCurve, D: DigestEngine>(
    q: &ProjectivePoint<C>,
    digest: &[u8],
    oid: &[u8],
    signature: &Signature<C>,
) -> bool {
    // 1. If S1 ⩾ q, return NO.
    let s1 = match Option::<Scalar<C>>::from(scalar_from_le_bytes::<C>(signature.s1_bytes())) {
        Some(s1) => s1,
        None => {
            debug!("signature rejected: S1 out of range");
            return false;
        }
    };

    // 2. Set R ← ((S1 + H) mod q)G + (S0 + 2^l)Q.
    let u1 = s1 + reduce_digest::<C>(digest);
    let u2 = offset_hash_half::<C>(signature.s0());
    let r = ProjectivePoint::<C>::lincomb(&ProjectivePoint::<C>::generator(), &u1, q, &u2);

    // 3. If R = O, return NO.
    if bool::from(r.is_identity()) {
        debug!("signature rejected: R is the identity");
        return false;
    }

    // 4. Set t ← ⟨h(OID(h) ‖ ⟨R⟩_2l ‖ H)⟩_l.
    let t = hash_half::<C, D>(oid, &r, digest);

    // 5. Return YES if S0 = t, NO otherwise.
    let valid = bool::from(t.as_slice().ct_eq(signature.s0().as_slice()));
    if !valid {
        debug!("signature rejected: hash mismatch");
    }
    valid
}
