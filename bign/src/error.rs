//! Error type.

use core::fmt::{self, Display};

/// Result type with the `bign` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Bign signature scheme errors.
///
/// Malformed signatures are not an error: verification reports them as a
/// plain rejection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Private key has the wrong length or lies outside `[1, n - 1]`.
    InvalidPrivateKey,

    /// Public key is malformed or not a point on the curve.
    InvalidPoint,

    /// One-time key lies outside `[1, n - 1]`.
    InvalidNonce,

    /// Digest is too short to stretch into a one-time key, or longer than
    /// the curve's field element length.
    InvalidDigest,

    /// Bounded one-time key generation ran out of iterations.
    NonceExhausted,

    /// Signature encoding has the wrong length.
    InvalidSignature,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidPrivateKey => "invalid private key",
            Error::InvalidPoint => "invalid public key point",
            Error::InvalidNonce => "one-time key out of range",
            Error::InvalidDigest => "invalid digest length",
            Error::NonceExhausted => "one-time key generation exhausted its iterations",
            Error::InvalidSignature => "invalid signature encoding",
        })
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
