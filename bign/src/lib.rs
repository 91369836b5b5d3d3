#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
#[allow(unused_extern_crates)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Emit a `tracing` event at trace level when the `tracing` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

/// Emit a `tracing` event at debug level when the `tracing` feature is on.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}

#[macro_use]
mod arithmetic;

pub mod bignp256;
pub mod bignp384;
pub mod bignp512;
pub mod dsa;
pub mod engine;
pub mod hazmat;
pub mod params;

mod error;
mod public_key;

pub use crate::{
    bignp256::BignP256,
    bignp384::BignP384,
    bignp512::BignP512,
    engine::{BeltEngine, DigestEngine},
    error::{Error, Result},
    params::{
        CurveParameters, BASH256_OID, BASH384_OID, BASH512_OID, BELT_OID, BIGN128, BIGN192, BIGN256,
    },
    public_key::PublicKey,
};

pub use belt_hash::{self, BeltHash};
pub use elliptic_curve::{self, generic_array::GenericArray};
pub use signature;

use core::fmt::Debug;
use elliptic_curve::{
    generic_array::ArrayLength,
    subtle::{Choice, CtOption},
    AffinePoint, FieldBytes,
};
use primeorder::PrimeCurveParams;

/// Elliptic curve usable with the Bign signature scheme.
///
/// Implemented by [`BignP256`], [`BignP384`] and [`BignP512`], the three
/// curves of STB 34.101.45-2013 at the 128, 192 and 256-bit security levels.
/// Everything in [`dsa`] and [`hazmat`] is generic over this trait.
pub trait BignCurve: PrimeCurveParams {
    /// Size of the hash half `S0` of a signature: `length / 2` bytes.
    type HalfSize: ArrayLength<u8> + Debug + Eq;

    /// Size of a signature `S0 ‖ S1`: `3 * length / 2` bytes.
    type SignatureSize: ArrayLength<u8> + Debug + Eq;

    /// Size of an uncompressed public key `0x04 ‖ x ‖ y`.
    type PublicKeySize: ArrayLength<u8> + Debug + Eq;

    /// Domain parameters of the curve.
    const PARAMETERS: CurveParameters;

    /// Recover the affine point with big-endian `x` coordinate and the given
    /// `y` parity, if `x` is the abscissa of a curve point.
    fn decompress(x: &FieldBytes<Self>, y_is_odd: Choice) -> CtOption<AffinePoint<Self>>;
}
