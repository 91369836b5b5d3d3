//! bign-curve256v1 scalar field elements.

#![allow(clippy::arithmetic_side_effects)]

use super::{BignP256, FieldBytes};
use crate::params::BIGN128;
use core::{
    iter::{Product, Sum},
    ops::{AddAssign, MulAssign, Neg, SubAssign},
};
use elliptic_curve::{
    bigint::U256,
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
pub struct Scalar(pub(super) U256);

impl_bign_field_element!(BignP256, Scalar, FieldBytes, U256, BIGN128.n);
impl_bign_scalar!(BignP256, Scalar, FieldBytes, U256);

impl Scalar {
    /// Returns the square root of self mod n, or `None` if no square root
    /// exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        // n ≡ 3 mod 4, so sqrt is self^((n + 1) // 4) (mod n).
        let sqrt = self.pow_vartime(&[
            0x1f96afe6498f5982,
            0xf65723b5837ed37f,
            0xffffffffffffffff,
            0x3fffffffffffffff,
        ]);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }
}

impl PrimeField for Scalar {
    type Repr = FieldBytes;

    const MODULUS: &'static str = BIGN128.n;
    const NUM_BITS: u32 = 256;
    const CAPACITY: u32 = 255;
    const TWO_INV: Self = Self::from_u64(2).invert_unchecked();
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(3);
    const S: u32 = 1;
    const ROOT_OF_UNITY: Self =
        Self::from_hex("ffffffffffffffffffffffffffffffffd95c8ed60dfb4dfc7e5abf99263d6606");
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.invert_unchecked();
    const DELTA: Self = Self::from_u64(9);

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
    use super::{FieldBytes, Scalar, U256};
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
    const T: [u64; 4] = [
        0x3f2d5fcc931eb303,
        0xecae476b06fda6fe,
        0xffffffffffffffff,
        0x7fffffffffffffff,
    ];

    impl_field_identity_tests!(Scalar);
    impl_field_invert_tests!(Scalar);
    impl_field_sqrt_tests!(Scalar);
    impl_primefield_tests!(Scalar, T);

    #[test]
    fn reduce_wraps_order() {
        let n = U256::from_be_hex(super::BIGN128.n);
        assert_eq!(<Scalar as Reduce<U256>>::reduce(n), Scalar::ZERO);
        let n_plus_one = n.wrapping_add(&U256::ONE);
        assert_eq!(<Scalar as Reduce<U256>>::reduce(n_plus_one), Scalar::ONE);
    }

    #[test]
    fn is_high() {
        assert!(!bool::from(Scalar::ONE.is_high()));
        assert!(bool::from((-Scalar::ONE).is_high()));
    }

    #[test]
    fn scalar_primitive_round_trip() {
        let s = Scalar::from_u64(0xdead_beef);
        let primitive: ScalarPrimitive<super::BignP256> = s.into();
        assert_eq!(Scalar::from(primitive), s);
    }

    #[test]
    fn from_repr_rejects_order() {
        let n = FieldBytes::from(hex!(
            "ffffffffffffffffffffffffffffffffd95c8ed60dfb4dfc7e5abf99263d6607"
        ));
        assert!(bool::from(Scalar::from_repr(n).is_none()));
    }
}
