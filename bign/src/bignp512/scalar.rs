//! bign-curve512v1 scalar field elements.

#![allow(clippy::arithmetic_side_effects)]

use super::{BignP512, FieldBytes};
use crate::params::BIGN256;
use core::{
    iter::{Product, Sum},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use elliptic_curve::{
    bigint::U512,
    ff::PrimeField,
    subtle::{Choice, ConstantTimeEq, CtOption},
};

/// Scalars are elements in the finite field modulo `n`.
///
/// # Trait impls
///
/// Much of the important functionality of scalars is provided by traits from
/// the [`ff`](https://docs.rs/ff/) crate, which is re-exported as
/// `bign::elliptic_curve::ff`:
///
/// - [`Field`](https://docs.rs/ff/latest/ff/trait.Field.html) -
///   represents elements of finite fields and provides:
///   - [`Field::random`](https://docs.rs/ff/latest/ff/trait.Field.html#tymethod.random) -
///     generate a random scalar
///   - `double`, `square`, and `invert` operations
///   - Bounds for [`Add`], [`Sub`], [`Mul`], and [`Neg`] (as well as `*Assign` equivalents)
///   - Bounds for [`ConditionallySelectable`] from the `subtle` crate
/// - [`PrimeField`](https://docs.rs/ff/latest/ff/trait.PrimeField.html) -
///   represents elements of prime fields and provides:
///   - `from_repr`/`to_repr` for converting field elements from/to big integers.
///   - `multiplicative_generator` and `root_of_unity` constants.
///
/// Please see the documentation for the relevant traits for more information.
///
/// [`Add`]: core::ops::Add
/// [`Mul`]: core::ops::Mul
/// [`Sub`]: core::ops::Sub
/// [`ConditionallySelectable`]: elliptic_curve::subtle::ConditionallySelectable
#[derive(Clone, Copy, Debug)]
pub struct Scalar(pub(super) U512);

impl_bign_field_element!(BignP512, Scalar, FieldBytes, U512, BIGN256.n);
impl_bign_scalar!(BignP512, Scalar, FieldBytes, U512);

impl Scalar {
    /// Returns the square root of self mod n, or `None` if no square root
    /// exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        // n ≡ 1 mod 16, so use Tonelli-Shanks with (t - 1) // 2 where
        // t = (n - 1) >> S.
        const TM1D2: [u64; 8] = [
            0x96e7fd6a48683477,
            0xa1b0de572caab6f9,
            0x77935f5d8171089f,
            0xfd960049600cc002,
            0xffffffffffffffff,
            0xffffffffffffffff,
            0xffffffffffffffff,
            0x07ffffffffffffff,
        ];
        elliptic_curve::ff::helpers::sqrt_tonelli_shanks(self, TM1D2)
    }
}

impl PrimeField for Scalar {
    type Repr = FieldBytes;

    const MODULUS: &'static str = BIGN256.n;
    const NUM_BITS: u32 = 512;
    const CAPACITY: u32 = 511;
    const TWO_INV: Self = Self::from_u64(2).invert_unchecked();
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(3);
    const S: u32 = 4;
    const ROOT_OF_UNITY: Self =
        Self::from_hex("2766d9ff1f6d027b145559590bfd251b7c7a61f8514eca75fb01855b9f132ebf765f83cc245e68f98b0386f3194edf3d9f3728b058a7f09eafa823e8107095dc");
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.invert_unchecked();
    const DELTA: Self = Self::from_u64(43046721);

    #[inline]
    fn from_repr(bytes: FieldBytes) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    #[inline]
    fn to_repr(&self) -> FieldBytes {
        self.to_bytes()
    }

    #[inline]
    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldBytes, Scalar, U512};
    use elliptic_curve::{
        ff::PrimeField,
        ops::Reduce,
        scalar::{IsHigh, ScalarPrimitive},
    };
    use hex_literal::hex;
    use primeorder::{
        impl_field_identity_tests, impl_field_invert_tests, impl_field_sqrt_tests,
        impl_primefield_tests,
    };

    /// t = (modulus - 1) >> S
    const T: [u64; 8] = [
        0x2dcffad490d068ef,
        0x4361bcae59556df3,
        0xef26bebb02e2113f,
        0xfb2c0092c0198004,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x0fffffffffffffff,
    ];

    impl_field_identity_tests!(Scalar);
    impl_field_invert_tests!(Scalar);
    impl_field_sqrt_tests!(Scalar);
    impl_primefield_tests!(Scalar, T);

    #[test]
    fn reduce_wraps_order() {
        let n = U512::from_be_hex(super::BIGN256.n);
        assert_eq!(<Scalar as Reduce<U512>>::reduce(n), Scalar::ZERO);
        let n_plus_one = n.wrapping_add(&U512::ONE);
        assert_eq!(<Scalar as Reduce<U512>>::reduce(n_plus_one), Scalar::ONE);
    }

    #[test]
    fn is_high() {
        assert!(!bool::from(Scalar::ONE.is_high()));
        assert!(bool::from((-Scalar::ONE).is_high()));
    }

    #[test]
    fn scalar_primitive_round_trip() {
        let s = Scalar::from_u64(0xdead_beef);
        let primitive: ScalarPrimitive<super::BignP512> = s.into();
        assert_eq!(Scalar::from(primitive), s);
    }

    #[test]
    fn from_repr_rejects_order() {
        let n = FieldBytes::from(hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb2c0092c0198004ef26bebb02e2113f4361bcae59556df32dcffad490d068ef1"
        ));
        assert!(bool::from(Scalar::from_repr(n).is_none()));
    }
}
