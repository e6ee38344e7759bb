//! Trait system for rational arithmetic over fixed-width and arbitrary-precision
//! integers.
//!
//! `Rational<T>` is generic over any [`RationalInteger`]. Two capability traits
//! refine it and select the code path used by the engine:
//!
//! - [`FixedWidthInteger`]: bounded integers (`i8`..`i128`, `u8`..`u128`,
//!   `isize`, `usize`, `crypto_bigint::Uint<LIMBS>`). These expose a full-width
//!   multiplication and overflow-reporting addition, so rationals built on them
//!   compare without overflow and add with [`Rational::checked_add`].
//! - [`UnboundedInteger`]: arbitrary-precision integers (`BigInt`, `BigUint`).
//!   Their arithmetic cannot overflow, so rationals built on them add through
//!   plain [`Rational::add`] and the `+` operator.
//!
//! Every backend is wired up by a macro in this module.
//!
//! # Example
//!
//! ```
//! use exact_rational::FixedWidthInteger;
//!
//! // -128 * 127 = -16256 = 0xC080 as a 16-bit two's-complement value.
//! assert_eq!(i8::MIN.multiplied_full_width(&i8::MAX), (-64, 0x80));
//! ```
//!
//! [`Rational::checked_add`]: crate::Rational::checked_add
//! [`Rational::add`]: crate::Rational::add

use core::cmp::Ordering;
use core::fmt::Debug;
use core::mem;

use crypto_bigint::{Uint, Word};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Integer type suitable for use in `Rational<T>`.
///
/// Division and remainder truncate toward zero. Every implementor names an
/// unsigned [`Magnitude`](RationalInteger::Magnitude) type wide enough to hold
/// the absolute value of any of its values, including the most negative one.
pub trait RationalInteger: Clone + Debug + Eq + Ord + Sized + 'static {
    /// Unsigned type holding absolute values of `Self`.
    type Magnitude: RationalInteger;

    /// The zero value.
    fn zero() -> Self;

    /// The one value.
    fn one() -> Self;

    /// Returns `true` if this value is zero.
    fn is_zero(&self) -> bool;

    /// Returns `true` if this value is below zero.
    fn is_negative(&self) -> bool;

    /// Absolute value, as the magnitude type.
    fn magnitude(&self) -> Self::Magnitude;

    /// Converts a magnitude back into `Self`.
    ///
    /// The magnitude must not exceed the magnitude of some value of `Self`;
    /// bounded implementations truncate otherwise.
    fn from_magnitude(magnitude: Self::Magnitude) -> Self;

    /// Truncating division, panicking on division by zero.
    fn div_ref(&self, divisor: &Self) -> Self;

    /// Remainder of truncating division, with the sign of `self`.
    fn rem_ref(&self, divisor: &Self) -> Self;

    /// Orders `a * b` against `c * d` without losing precision.
    fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering;

    /// Exact conversion to an arbitrary-precision integer.
    fn to_big_int(&self) -> BigInt;

    /// Quotient and remainder of truncating division.
    #[inline]
    fn quotient_and_remainder(&self, divisor: &Self) -> (Self, Self) {
        (self.div_ref(divisor), self.rem_ref(divisor))
    }

    /// Greatest common divisor of two non-negative values (Euclid).
    fn gcd_nonnegative(mut a: Self, mut b: Self) -> Self {
        while !b.is_zero() {
            let rem = a.rem_ref(&b);
            a = b;
            b = rem;
        }
        a
    }
}

/// Integer with a known, bounded bit width.
///
/// The full-width and overflow-reporting primitives are total: they are
/// defined for every pair of inputs, including `MIN`.
pub trait FixedWidthInteger: RationalInteger + Copy {
    /// Number of bits in this integer type.
    const BITS: u32;

    /// Smallest representable value.
    const MIN: Self;

    /// Largest representable value.
    const MAX: Self;

    /// Computes `self * multiplier + addend` as a double-width `(high, low)`
    /// pair. The result always fits, so this never overflows.
    ///
    /// `high` carries the sign of the result, `low` is the unsigned low word.
    fn multiplied_adding_full_width(
        &self,
        multiplier: &Self,
        addend: &Self,
    ) -> (Self, Self::Magnitude);

    /// Multiply returning the double-width product as `(high, low)`.
    #[inline]
    fn multiplied_full_width(&self, other: &Self) -> (Self, Self::Magnitude) {
        self.multiplied_adding_full_width(other, &Self::zero())
    }

    /// Wrapping addition plus a flag telling whether it overflowed.
    fn adding_reporting_overflow(&self, other: &Self) -> (Self, bool);

    /// Wrapping multiplication plus a flag telling whether it overflowed.
    fn multiplied_reporting_overflow(&self, other: &Self) -> (Self, bool);

    /// Bit pattern of `self` reinterpreted as the magnitude type.
    fn truncating_magnitude(&self) -> Self::Magnitude;

    /// Magnitude with every bit set.
    fn magnitude_max() -> Self::Magnitude;

    /// Full-width product of two magnitudes as `(high, low)`.
    fn magnitude_multiplied_full_width(
        a: &Self::Magnitude,
        b: &Self::Magnitude,
    ) -> (Self::Magnitude, Self::Magnitude);

    /// Converts a magnitude into `Self`, returning `None` if it does not fit.
    fn from_magnitude_exactly(magnitude: &Self::Magnitude) -> Option<Self>;
}

/// Arbitrary-precision integer whose arithmetic never overflows.
pub trait UnboundedInteger: RationalInteger {
    /// Sum of two values.
    fn add_ref(&self, other: &Self) -> Self;

    /// Product of two values.
    fn mul_ref(&self, other: &Self) -> Self;
}

/// Comparison of two double-width products for bounded integers.
///
/// `(high, low)` pairs order lexicographically: the signed high words first,
/// then the unsigned low words.
#[inline]
pub(crate) fn compare_products_full_width<T: FixedWidthInteger>(
    a: &T,
    b: &T,
    c: &T,
    d: &T,
) -> Ordering {
    a.multiplied_full_width(b).cmp(&c.multiplied_full_width(d))
}

/// Comparison of two products for unbounded integers.
#[inline]
pub(crate) fn compare_products_unbounded<T: UnboundedInteger>(
    a: &T,
    b: &T,
    c: &T,
    d: &T,
) -> Ordering {
    a.mul_ref(b).cmp(&c.mul_ref(d))
}

// ============================================================================
// FULL-WIDTH MULTIPLICATION
// ============================================================================

/// Macro to build a full-width `a * b + addend` by widening into a larger
/// primitive. The wider type always holds the result, even at `MIN * MIN`.
macro_rules! widening_full_width {
    ($name:ident, $t:ty, $magnitude:ty, $wide:ty) => {
        #[inline(always)]
        fn $name(a: $t, b: $t, addend: $t) -> ($t, $magnitude) {
            let value = (a as $wide) * (b as $wide) + (addend as $wide);
            ((value >> <$t>::BITS) as $t, value as $magnitude)
        }
    };
}

widening_full_width!(i8_full_width, i8, u8, i16);
widening_full_width!(i16_full_width, i16, u16, i32);
widening_full_width!(i32_full_width, i32, u32, i64);
widening_full_width!(i64_full_width, i64, u64, i128);
widening_full_width!(isize_full_width, isize, usize, i128);
widening_full_width!(u8_full_width, u8, u8, u16);
widening_full_width!(u16_full_width, u16, u16, u32);
widening_full_width!(u32_full_width, u32, u32, u64);
widening_full_width!(u64_full_width, u64, u64, u128);
widening_full_width!(usize_full_width, usize, usize, u128);

/// Schoolbook multiply on 64-bit halves; there is no wider primitive.
fn u128_full_width(a: u128, b: u128, addend: u128) -> (u128, u128) {
    const HALF: u32 = 64;
    const MASK: u128 = u64::MAX as u128;

    let (a_hi, a_lo) = (a >> HALF, a & MASK);
    let (b_hi, b_lo) = (b >> HALF, b & MASK);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    // At most 3 * (2^64 - 1), no overflow.
    let cross = (lo_lo >> HALF) + (hi_lo & MASK) + (lo_hi & MASK);

    let low = (lo_lo & MASK) | (cross << HALF);
    let high = hi_hi + (hi_lo >> HALF) + (lo_hi >> HALF) + (cross >> HALF);

    // (2^128 - 1)^2 + 2^128 - 1 < 2^256, so the carry never leaves `high`.
    let (low, carry) = low.overflowing_add(addend);
    (high + u128::from(carry), low)
}

fn i128_full_width(a: i128, b: i128, addend: i128) -> (i128, u128) {
    let (high, low) = u128_full_width(a.unsigned_abs(), b.unsigned_abs(), 0);

    // |a * b| <= 2^254, so `high` stays below 2^126 before negation.
    let (high, low) = if (a < 0) == (b < 0) {
        (high as i128, low)
    } else {
        let negated_low = (!low).wrapping_add(1);
        let negated_high = (!high).wrapping_add(u128::from(low == 0));
        (negated_high as i128, negated_low)
    };

    // Add the sign-extended addend as a 256-bit value.
    let (low, carry) = low.overflowing_add(addend as u128);
    let extension = if addend < 0 { -1 } else { 0 };
    (high.wrapping_add(extension).wrapping_add(i128::from(carry)), low)
}

// ============================================================================
// PRIMITIVE IMPLEMENTATIONS
// ============================================================================

/// Macro to implement the capability traits for a signed primitive.
macro_rules! impl_signed_integer {
    ($t:ty, $magnitude:ty, $full_width:ident) => {
        impl RationalInteger for $t {
            type Magnitude = $magnitude;

            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline(always)]
            fn one() -> Self {
                1
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn is_negative(&self) -> bool {
                *self < 0
            }

            #[inline(always)]
            fn magnitude(&self) -> $magnitude {
                self.unsigned_abs()
            }

            #[inline(always)]
            fn from_magnitude(magnitude: $magnitude) -> Self {
                magnitude as $t
            }

            #[inline(always)]
            fn div_ref(&self, divisor: &Self) -> Self {
                *self / *divisor
            }

            #[inline(always)]
            fn rem_ref(&self, divisor: &Self) -> Self {
                *self % *divisor
            }

            #[inline]
            fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
                compare_products_full_width(a, b, c, d)
            }

            #[inline]
            fn to_big_int(&self) -> BigInt {
                BigInt::from(*self)
            }
        }

        impl FixedWidthInteger for $t {
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn multiplied_adding_full_width(
                &self,
                multiplier: &Self,
                addend: &Self,
            ) -> (Self, $magnitude) {
                $full_width(*self, *multiplier, *addend)
            }

            #[inline(always)]
            fn adding_reporting_overflow(&self, other: &Self) -> (Self, bool) {
                self.overflowing_add(*other)
            }

            #[inline(always)]
            fn multiplied_reporting_overflow(&self, other: &Self) -> (Self, bool) {
                self.overflowing_mul(*other)
            }

            #[inline(always)]
            fn truncating_magnitude(&self) -> $magnitude {
                *self as $magnitude
            }

            #[inline(always)]
            fn magnitude_max() -> $magnitude {
                <$magnitude>::MAX
            }

            #[inline(always)]
            fn magnitude_multiplied_full_width(
                a: &$magnitude,
                b: &$magnitude,
            ) -> ($magnitude, $magnitude) {
                a.multiplied_full_width(b)
            }

            #[inline]
            fn from_magnitude_exactly(magnitude: &$magnitude) -> Option<Self> {
                <$t>::try_from(*magnitude).ok()
            }
        }
    };
}

/// Macro to implement the capability traits for an unsigned primitive.
macro_rules! impl_unsigned_integer {
    ($t:ty, $full_width:ident) => {
        impl RationalInteger for $t {
            type Magnitude = $t;

            #[inline(always)]
            fn zero() -> Self {
                0
            }

            #[inline(always)]
            fn one() -> Self {
                1
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline(always)]
            fn is_negative(&self) -> bool {
                false
            }

            #[inline(always)]
            fn magnitude(&self) -> $t {
                *self
            }

            #[inline(always)]
            fn from_magnitude(magnitude: $t) -> Self {
                magnitude
            }

            #[inline(always)]
            fn div_ref(&self, divisor: &Self) -> Self {
                *self / *divisor
            }

            #[inline(always)]
            fn rem_ref(&self, divisor: &Self) -> Self {
                *self % *divisor
            }

            #[inline]
            fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
                compare_products_full_width(a, b, c, d)
            }

            #[inline]
            fn to_big_int(&self) -> BigInt {
                BigInt::from(*self)
            }

            /// Binary GCD: strips common powers of two, then subtracts.
            fn gcd_nonnegative(mut a: Self, mut b: Self) -> Self {
                if a == 0 {
                    return b;
                }
                if b == 0 {
                    return a;
                }

                let shift = (a | b).trailing_zeros();
                a >>= a.trailing_zeros();
                b >>= b.trailing_zeros();

                loop {
                    if a > b {
                        mem::swap(&mut a, &mut b);
                    }
                    b -= a;
                    if b == 0 {
                        return a << shift;
                    }
                    b >>= b.trailing_zeros();
                }
            }
        }

        impl FixedWidthInteger for $t {
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline(always)]
            fn multiplied_adding_full_width(&self, multiplier: &Self, addend: &Self) -> (Self, $t) {
                $full_width(*self, *multiplier, *addend)
            }

            #[inline(always)]
            fn adding_reporting_overflow(&self, other: &Self) -> (Self, bool) {
                self.overflowing_add(*other)
            }

            #[inline(always)]
            fn multiplied_reporting_overflow(&self, other: &Self) -> (Self, bool) {
                self.overflowing_mul(*other)
            }

            #[inline(always)]
            fn truncating_magnitude(&self) -> $t {
                *self
            }

            #[inline(always)]
            fn magnitude_max() -> $t {
                <$t>::MAX
            }

            #[inline(always)]
            fn magnitude_multiplied_full_width(a: &$t, b: &$t) -> ($t, $t) {
                $full_width(*a, *b, 0)
            }

            #[inline(always)]
            fn from_magnitude_exactly(magnitude: &$t) -> Option<Self> {
                Some(*magnitude)
            }
        }
    };
}

impl_signed_integer!(i8, u8, i8_full_width);
impl_signed_integer!(i16, u16, i16_full_width);
impl_signed_integer!(i32, u32, i32_full_width);
impl_signed_integer!(i64, u64, i64_full_width);
impl_signed_integer!(i128, u128, i128_full_width);
impl_signed_integer!(isize, usize, isize_full_width);

impl_unsigned_integer!(u8, u8_full_width);
impl_unsigned_integer!(u16, u16_full_width);
impl_unsigned_integer!(u32, u32_full_width);
impl_unsigned_integer!(u64, u64_full_width);
impl_unsigned_integer!(u128, u128_full_width);
impl_unsigned_integer!(usize, usize_full_width);

// ============================================================================
// CRYPTO-BIGINT IMPLEMENTATIONS
// ============================================================================

impl<const LIMBS: usize> RationalInteger for Uint<LIMBS> {
    type Magnitude = Self;

    #[inline(always)]
    fn zero() -> Self {
        Uint::ZERO
    }

    #[inline(always)]
    fn one() -> Self {
        Uint::ONE
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == Uint::ZERO
    }

    #[inline(always)]
    fn is_negative(&self) -> bool {
        false
    }

    #[inline(always)]
    fn magnitude(&self) -> Self {
        *self
    }

    #[inline(always)]
    fn from_magnitude(magnitude: Self) -> Self {
        magnitude
    }

    #[inline(always)]
    fn div_ref(&self, divisor: &Self) -> Self {
        self.wrapping_div(divisor)
    }

    #[inline(always)]
    fn rem_ref(&self, divisor: &Self) -> Self {
        self.wrapping_rem(divisor)
    }

    #[inline]
    fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        compare_products_full_width(a, b, c, d)
    }

    fn to_big_int(&self) -> BigInt {
        let word_bits = mem::size_of::<Word>() * 8;
        let magnitude = self
            .to_words()
            .iter()
            .rev()
            .fold(<BigUint as Zero>::zero(), |acc, word| {
                (acc << word_bits) | BigUint::from(*word)
            });
        BigInt::from(magnitude)
    }
}

impl<const LIMBS: usize> FixedWidthInteger for Uint<LIMBS> {
    const BITS: u32 = (LIMBS * mem::size_of::<Word>() * 8) as u32;
    const MIN: Self = Uint::ZERO;
    const MAX: Self = Uint::MAX;

    #[inline]
    fn multiplied_adding_full_width(&self, multiplier: &Self, addend: &Self) -> (Self, Self) {
        let (low, high) = self.mul_wide(multiplier);
        let sum = low.wrapping_add(addend);
        if sum < low {
            (high.wrapping_add(&Uint::ONE), sum)
        } else {
            (high, sum)
        }
    }

    #[inline(always)]
    fn adding_reporting_overflow(&self, other: &Self) -> (Self, bool) {
        let sum = self.wrapping_add(other);
        (sum, sum < *self)
    }

    #[inline(always)]
    fn multiplied_reporting_overflow(&self, other: &Self) -> (Self, bool) {
        let (low, high) = self.mul_wide(other);
        (low, high != Uint::ZERO)
    }

    #[inline(always)]
    fn truncating_magnitude(&self) -> Self {
        *self
    }

    #[inline(always)]
    fn magnitude_max() -> Self {
        Uint::MAX
    }

    #[inline(always)]
    fn magnitude_multiplied_full_width(a: &Self, b: &Self) -> (Self, Self) {
        a.multiplied_full_width(b)
    }

    #[inline(always)]
    fn from_magnitude_exactly(magnitude: &Self) -> Option<Self> {
        Some(*magnitude)
    }
}

// ============================================================================
// NUM-BIGINT IMPLEMENTATIONS
// ============================================================================

impl RationalInteger for BigInt {
    type Magnitude = BigUint;

    #[inline]
    fn zero() -> Self {
        Zero::zero()
    }

    #[inline]
    fn one() -> Self {
        One::one()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }

    #[inline]
    fn magnitude(&self) -> BigUint {
        BigInt::magnitude(self).clone()
    }

    #[inline]
    fn from_magnitude(magnitude: BigUint) -> Self {
        BigInt::from(magnitude)
    }

    #[inline]
    fn div_ref(&self, divisor: &Self) -> Self {
        self / divisor
    }

    #[inline]
    fn rem_ref(&self, divisor: &Self) -> Self {
        self % divisor
    }

    #[inline]
    fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        compare_products_unbounded(a, b, c, d)
    }

    #[inline]
    fn to_big_int(&self) -> BigInt {
        self.clone()
    }
}

impl UnboundedInteger for BigInt {
    #[inline]
    fn add_ref(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }
}

impl RationalInteger for BigUint {
    type Magnitude = BigUint;

    #[inline]
    fn zero() -> Self {
        Zero::zero()
    }

    #[inline]
    fn one() -> Self {
        One::one()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        false
    }

    #[inline]
    fn magnitude(&self) -> BigUint {
        self.clone()
    }

    #[inline]
    fn from_magnitude(magnitude: BigUint) -> Self {
        magnitude
    }

    #[inline]
    fn div_ref(&self, divisor: &Self) -> Self {
        self / divisor
    }

    #[inline]
    fn rem_ref(&self, divisor: &Self) -> Self {
        self % divisor
    }

    #[inline]
    fn compare_products(a: &Self, b: &Self, c: &Self, d: &Self) -> Ordering {
        compare_products_unbounded(a, b, c, d)
    }

    #[inline]
    fn to_big_int(&self) -> BigInt {
        BigInt::from(self.clone())
    }
}

impl UnboundedInteger for BigUint {
    #[inline]
    fn add_ref(&self, other: &Self) -> Self {
        self + other
    }

    #[inline]
    fn mul_ref(&self, other: &Self) -> Self {
        self * other
    }
}
