//! Field and scalar arithmetic shared by the Bign curves.
//!
//! The base fields and scalar fields of all three curves are generic
//! Montgomery-form prime fields built on `crypto-bigint` constant-modulus
//! residues. The macros in this module wire those residues into the
//! `primeorder` field element machinery, and into the scalar traits
//! `elliptic-curve` requires from a curve's scalar type.

use crate::BignCurve;
use elliptic_curve::{
    point::AffineCoordinates,
    subtle::{ConditionallySelectable, ConstantTimeEq, CtOption},
    AffinePoint, Field, FieldBytes, PrimeField,
};

/// Implement a Montgomery-form field element type modulo `$modulus_hex`.
///
/// Expands to the residue type for the modulus, the `const fn` word-level
/// operations `primeorder::impl_mont_field_element!` expects, and inherent
/// inversion. The invoking module must provide `sqrt` and a `PrimeField` impl,
/// and must have `Choice`, `CtOption`, `ConstantTimeEq`, the `*Assign` ops,
/// `Neg`, `Sum` and `Product` in scope.
macro_rules! impl_bign_field_element {
    (
        $curve:tt,
        $fe:tt,
        $bytes:ty,
        $uint:ident,
        $modulus_hex:expr
    ) => {
        elliptic_curve::bigint::impl_modulus!(Modulus, $uint, $modulus_hex);

        type Residue =
            elliptic_curve::bigint::modular::constant_mod::Residue<Modulus, { $uint::LIMBS }>;

        type Limbs = [elliptic_curve::bigint::Word; $uint::LIMBS];

        /// Constant representing the modulus.
        pub(crate) const MODULUS: $uint = $uint::from_be_hex($modulus_hex);

        const fn residue(w: &Limbs) -> Residue {
            Residue::from_montgomery($uint::from_words(*w))
        }

        const fn limbs(r: &Residue) -> Limbs {
            r.to_montgomery().to_words()
        }

        const fn from_montgomery(w: &Limbs) -> Limbs {
            Residue::retrieve(&residue(w)).to_words()
        }

        const fn to_montgomery(w: &Limbs) -> Limbs {
            limbs(&Residue::new(&$uint::from_words(*w)))
        }

        const fn add(a: &Limbs, b: &Limbs) -> Limbs {
            limbs(&Residue::add(&residue(a), &residue(b)))
        }

        const fn sub(a: &Limbs, b: &Limbs) -> Limbs {
            limbs(&Residue::sub(&residue(a), &residue(b)))
        }

        const fn mul(a: &Limbs, b: &Limbs) -> Limbs {
            limbs(&Residue::mul(&residue(a), &residue(b)))
        }

        const fn neg(a: &Limbs) -> Limbs {
            limbs(&Residue::neg(&residue(a)))
        }

        const fn square(a: &Limbs) -> Limbs {
            limbs(&Residue::square(&residue(a)))
        }

        primeorder::impl_mont_field_element!(
            $curve,
            $fe,
            $bytes,
            $uint,
            MODULUS,
            Limbs,
            from_montgomery,
            to_montgomery,
            add,
            sub,
            mul,
            neg,
            square
        );

        impl $fe {
            /// Compute multiplicative inversion: `1 / self`.
            pub fn invert(&self) -> CtOption<Self> {
                CtOption::new(self.invert_unchecked(), !self.is_zero())
            }

            /// Returns the multiplicative inverse of self.
            ///
            /// Does not check that self is non-zero.
            const fn invert_unchecked(&self) -> Self {
                let (inverse, _) = Residue::invert(&residue(self.0.as_words()));
                Self(inverse.to_montgomery())
            }
        }
    };
}

/// Implement the scalar traits `elliptic_curve::CurveArithmetic` needs for a
/// field element type produced by [`impl_bign_field_element!`].
macro_rules! impl_bign_scalar {
    ($curve:tt, $scalar:tt, $bytes:ty, $uint:ident) => {
        impl $scalar {
            /// Right shifts the scalar.
            ///
            /// Note: not constant-time with respect to the `shift` parameter.
            pub const fn shr_vartime(&self, shift: usize) -> $scalar {
                Self::from_uint_unchecked(self.to_canonical().shr_vartime(shift))
            }
        }

        impl AsRef<$scalar> for $scalar {
            fn as_ref(&self) -> &$scalar {
                self
            }
        }

        impl PartialOrd for $scalar {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $scalar {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.to_canonical().cmp(&other.to_canonical())
            }
        }

        impl elliptic_curve::scalar::FromUintUnchecked for $scalar {
            type Uint = $uint;

            fn from_uint_unchecked(uint: Self::Uint) -> Self {
                Self::from_uint_unchecked(uint)
            }
        }

        impl elliptic_curve::ops::Invert for $scalar {
            type Output = CtOption<Self>;

            fn invert(&self) -> CtOption<Self> {
                self.invert()
            }
        }

        impl elliptic_curve::scalar::IsHigh for $scalar {
            fn is_high(&self) -> Choice {
                use elliptic_curve::subtle::ConstantTimeGreater;
                const MODULUS_SHR1: $uint = MODULUS.shr_vartime(1);
                self.to_canonical().ct_gt(&MODULUS_SHR1)
            }
        }

        impl core::ops::Shr<usize> for $scalar {
            type Output = Self;

            fn shr(self, rhs: usize) -> Self::Output {
                self.shr_vartime(rhs)
            }
        }

        impl core::ops::ShrAssign<usize> for $scalar {
            fn shr_assign(&mut self, rhs: usize) {
                *self = *self >> rhs;
            }
        }

        impl elliptic_curve::ops::Reduce<$uint> for $scalar {
            type Bytes = $bytes;

            fn reduce(w: $uint) -> Self {
                use elliptic_curve::{bigint::Limb, subtle::ConditionallySelectable};
                let (r, underflow) = w.sbb(&MODULUS, Limb::ZERO);
                let underflow = Choice::from((underflow.0 >> (Limb::BITS - 1)) as u8);
                Self::from_uint_unchecked($uint::conditional_select(&w, &r, !underflow))
            }

            #[inline]
            fn reduce_bytes(bytes: &$bytes) -> Self {
                use elliptic_curve::bigint::ArrayEncoding;
                Self::reduce($uint::from_be_byte_array(*bytes))
            }
        }

        impl From<elliptic_curve::ScalarPrimitive<$curve>> for $scalar {
            fn from(w: elliptic_curve::ScalarPrimitive<$curve>) -> Self {
                Self::from_uint_unchecked(*w.as_uint())
            }
        }

        impl From<$scalar> for elliptic_curve::ScalarPrimitive<$curve> {
            fn from(scalar: $scalar) -> Self {
                // Canonical scalars are always below the modulus.
                elliptic_curve::ScalarPrimitive::new(scalar.to_canonical())
                    .unwrap_or(elliptic_curve::ScalarPrimitive::ZERO)
            }
        }

        impl From<$scalar> for $bytes {
            fn from(scalar: $scalar) -> Self {
                scalar.to_bytes()
            }
        }

        impl From<&$scalar> for $bytes {
            fn from(scalar: &$scalar) -> Self {
                scalar.to_bytes()
            }
        }

        impl From<$scalar> for $uint {
            fn from(scalar: $scalar) -> $uint {
                scalar.to_canonical()
            }
        }

        impl From<&$scalar> for $uint {
            fn from(scalar: &$scalar) -> $uint {
                scalar.to_canonical()
            }
        }

        impl TryFrom<$uint> for $scalar {
            type Error = elliptic_curve::Error;

            fn try_from(w: $uint) -> elliptic_curve::Result<Self> {
                Option::from(Self::from_uint(w)).ok_or(elliptic_curve::Error)
            }
        }
    };
}

/// Evaluate the right-hand side of `y² = x³ + ax + b` for the given curve.
fn curve_equation<C: BignCurve>(x: &C::FieldElement) -> C::FieldElement {
    x.square() * x + C::EQUATION_A * x + C::EQUATION_B
}

/// Build an affine point from big-endian coordinates, checking that both lie
/// in the base field and satisfy the curve equation.
pub(crate) fn affine_from_coordinates<C: BignCurve>(
    x: &FieldBytes<C>,
    y: &FieldBytes<C>,
) -> CtOption<AffinePoint<C>> {
    let fx = C::FieldElement::from_repr(x.clone());
    let fy = C::FieldElement::from_repr(y.clone());

    fx.and_then(|fx| {
        fy.and_then(|fy| {
            let on_curve = fy.square().ct_eq(&curve_equation::<C>(&fx));
            C::decompress(x, fy.is_odd()).and_then(|point| CtOption::new(point, on_curve))
        })
    })
}

/// Recover the `y` coordinate of a non-identity affine point from its `x`
/// coordinate and the parity of `y`.
pub(crate) fn affine_y<C: BignCurve>(point: &AffinePoint<C>) -> CtOption<C::FieldElement> {
    let odd = point.y_is_odd();
    C::FieldElement::from_repr(point.x())
        .and_then(|x| curve_equation::<C>(&x).sqrt())
        .map(|root| C::FieldElement::conditional_select(&root, &-root, root.is_odd() ^ odd))
}
