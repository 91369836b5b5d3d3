//! Hash and wide-block cipher backends.
//!
//! The signature protocol needs two symmetric primitives: a hash with a
//! 32-byte output, which produces the `S0` half of a signature and the key of
//! the one-time key generator, and a keyed length-preserving transform which
//! the generator iterates. [`DigestEngine`] names that pair so the protocol in
//! [`hazmat`](crate::hazmat) does not depend on a particular backend.

use crate::{Error, Result};
use belt_block::{belt_wblock_enc, to_u32};
use belt_hash::{BeltHash, Digest};

/// Size of a [`DigestEngine`] hash output and of a stretch key.
pub const DIGEST_SIZE: usize = 32;

/// Symmetric primitives consumed by the Bign protocol.
pub trait DigestEngine {
    /// Hash the concatenation of `parts`.
    fn hash(parts: &[&[u8]]) -> [u8; DIGEST_SIZE];

    /// Encrypt `data` in place under `key`.
    ///
    /// The transform must be a bijection on byte strings of a given length
    /// for a fixed key. Inputs shorter than two cipher blocks are rejected
    /// with [`Error::InvalidDigest`].
    fn stretch(key: &[u8; DIGEST_SIZE], data: &mut [u8]) -> Result<()>;
}

/// `belt-hash` and `belt-wblock` from STB 34.101.31.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BeltEngine;

impl DigestEngine for BeltEngine {
    fn hash(parts: &[&[u8]]) -> [u8; DIGEST_SIZE] {
        let mut hasher = BeltHash::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }

    fn stretch(key: &[u8; DIGEST_SIZE], data: &mut [u8]) -> Result<()> {
        belt_wblock_enc(data, &to_u32::<8>(key)).map_err(|_| Error::InvalidDigest)
    }
}
