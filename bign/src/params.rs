//! Curve domain parameters and hash algorithm identifiers.
//!
//! Parameters are those of STB 34.101.45-2013 Appendix B. Integers are
//! written as big-endian hexadecimal, the same form the field and scalar
//! types are built from.

/// DER-encoded object identifier of `belt-hash` (`1.2.112.0.2.0.34.101.31.81`).
///
/// This is the default hash identifier mixed into signatures and nonces.
pub const BELT_OID: [u8; 11] = [
    0x06, 0x09, 0x2A, 0x70, 0x00, 0x02, 0x00, 0x22, 0x65, 0x1F, 0x51,
];

/// DER-encoded object identifier of `bash256` (`1.2.112.0.2.0.34.101.77.11`).
pub const BASH256_OID: [u8; 11] = [
    0x06, 0x09, 0x2A, 0x70, 0x00, 0x02, 0x00, 0x22, 0x65, 0x4D, 0x0B,
];

/// DER-encoded object identifier of `bash384` (`1.2.112.0.2.0.34.101.77.12`).
pub const BASH384_OID: [u8; 11] = [
    0x06, 0x09, 0x2A, 0x70, 0x00, 0x02, 0x00, 0x22, 0x65, 0x4D, 0x0C,
];

/// DER-encoded object identifier of `bash512` (`1.2.112.0.2.0.34.101.77.13`).
pub const BASH512_OID: [u8; 11] = [
    0x06, 0x09, 0x2A, 0x70, 0x00, 0x02, 0x00, 0x22, 0x65, 0x4D, 0x0D,
];

/// Domain parameters of a Bign curve `y² = x³ + ax + b` over `GF(p)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveParameters {
    /// Standard name of the curve.
    pub name: &'static str,

    /// Field prime `p`.
    pub p: &'static str,

    /// Prime order `n` of the base point.
    pub n: &'static str,

    /// Curve coefficient `a`.
    pub a: &'static str,

    /// Curve coefficient `b`.
    pub b: &'static str,

    /// Base point `x` coordinate.
    pub gx: &'static str,

    /// Base point `y` coordinate.
    pub gy: &'static str,

    /// Cofactor.
    pub h: u32,

    /// Byte length of one field element or scalar.
    pub length: usize,

    /// Dotted object identifiers naming the curve.
    pub oids: &'static [&'static str],
}

impl CurveParameters {
    /// Byte length of the hash-derived half `S0` of a signature.
    pub const fn half_length(&self) -> usize {
        self.length / 2
    }

    /// Byte length of an encoded signature `S0 ‖ S1`.
    pub const fn signature_length(&self) -> usize {
        3 * self.half_length()
    }

    /// Byte length of an uncompressed public key `0x04 ‖ x ‖ y`.
    pub const fn public_key_length(&self) -> usize {
        1 + 2 * self.length
    }
}

/// bign-curve256v1: 128-bit security level.
pub const BIGN128: CurveParameters = CurveParameters {
    name: "bign-curve256v1",
    p: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff43",
    n: "ffffffffffffffffffffffffffffffffd95c8ed60dfb4dfc7e5abf99263d6607",
    a: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff40",
    b: "77ce6c1515f3a8edd2c13aabe4d8fbbe4cf55069978b9253b22e7d6bd69c03f1",
    gx: "0000000000000000000000000000000000000000000000000000000000000000",
    gy: "6bf7fc3cfb16d69f5ce4c9a351d6835d78913966c408f6521e29cf1804516a93",
    h: 1,
    length: 32,
    oids: &["1.2.112.0.2.0.34.101.45.3.1"],
};

/// bign-curve384v1: 192-bit security level.
pub const BIGN192: CurveParameters = CurveParameters {
    name: "bign-curve384v1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec3",
    n: "fffffffffffffffffffffffffffffffffffffffffffffffe6cccc40373af7bbb8046dae7a6a4ff0a3db7dc3ff30ca7b7",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec0",
    b: "3c75dfe1959cef2033075aab655d34d2712748bb0ffbb196a6216af9e9712e3a14bde2f0f3cebd7cbca7fc236873bf64",
    gx: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    gy: "5d438224a82e9e9e6330117e432dbf893a729a11dc86ffa00549e79e66b1d35584403e276b2a42f9ea5ecb31f733c451",
    h: 1,
    length: 48,
    oids: &["1.2.112.0.2.0.34.101.45.3.2"],
};

/// bign-curve512v1: 256-bit security level.
pub const BIGN256: CurveParameters = CurveParameters {
    name: "bign-curve512v1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffdc7",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb2c0092c0198004ef26bebb02e2113f4361bcae59556df32dcffad490d068ef1",
    a: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffdc4",
    b: "6cb45944933b8c43d88c5d6a60fd58895bc6a9eedd5d255117ce13e3daadb0882711dcb5c4245e952933008c87aca243ea8622273a49a27a09346998d6139c90",
    gx: "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    gy: "a826ff7ae4037681b182e6f7a0d18fabb0ab41b3b361bce2d2edf81b00cccada6973dde20efa6fd2ff777395eee8226167aa83b9c94c0d04b792ae6fceefedbd",
    h: 1,
    length: 64,
    oids: &["1.2.112.0.2.0.34.101.45.3.3"],
};
