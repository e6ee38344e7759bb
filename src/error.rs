//! Overflow errors returned by fixed-width rational and integer operations.
//!
//! Both errors carry the exact, unbounded result split into words of the
//! term type, so a caller can rebuild it in a wider container instead of
//! just learning that something went wrong.

use core::fmt;

use num_bigint::BigInt;

use crate::integer_trait::{FixedWidthInteger, RationalInteger};

/// Error returned by [`Rational::checked_add`](crate::Rational::checked_add).
///
/// The three fields encode the exact numerator of the sum (over the shared
/// denominator) as a `2 * BITS + 1` bit two's-complement integer:
///
/// ```text
/// (high_bit ? -1 : 0) << (2 * BITS) | mid << BITS | low
/// ```
///
/// For example a `Rational<u8>` reports 17-bit results, which fit in a `u32`.
///
/// ```
/// use exact_rational::Rational;
///
/// let err = Rational::<i8>::from(i8::MIN)
///     .checked_add(&Rational::from(-1))
///     .unwrap_err();
///
/// let value = (if err.high_bit { -1i32 } else { 0 }) << 16
///     | i32::from(err.mid) << 8
///     | i32::from(err.low);
/// assert_eq!(value, -129);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalOverflowError<T: FixedWidthInteger> {
    /// Sign bit of the encoded value.
    pub high_bit: bool,
    /// Middle word.
    pub mid: T::Magnitude,
    /// Low word.
    pub low: T::Magnitude,
}

impl<T: FixedWidthInteger> RationalOverflowError<T> {
    /// Create an error from its three words.
    #[inline]
    pub fn new(high_bit: bool, mid: T::Magnitude, low: T::Magnitude) -> Self {
        Self { high_bit, mid, low }
    }

    /// Encode the true sum of `lhs + rhs` given their wrapped sum.
    ///
    /// Only meaningful when the addition actually overflowed.
    pub(crate) fn from_wrapped_sum(lhs: &T, rhs: &T, wrapped: &T) -> Self {
        let low = wrapped.truncating_magnitude();

        if lhs.is_negative() && rhs.is_negative() {
            return Self::new(true, T::magnitude_max(), low);
        }

        // A signed sum that overflowed upward lands on a negative pattern and
        // still fits in BITS + 1 bits; an unsigned one carries into `mid`.
        let mid = if wrapped.is_negative() {
            <T::Magnitude as RationalInteger>::zero()
        } else {
            <T::Magnitude as RationalInteger>::one()
        };
        Self::new(false, mid, low)
    }

    /// Encode a double-width `(high, low)` value, sign-extending `high` into
    /// the top bit.
    pub(crate) fn from_full_width(high: &T, low: T::Magnitude) -> Self {
        Self::new(high.is_negative(), high.truncating_magnitude(), low)
    }

    /// Decode the exact numerator.
    pub fn to_big_int(&self) -> BigInt {
        let bits = T::BITS;
        let value = (self.mid.to_big_int() << bits) + self.low.to_big_int();

        if self.high_bit {
            value - (BigInt::from(1u8) << (2 * bits))
        } else {
            value
        }
    }
}

impl<T: FixedWidthInteger> fmt::Display for RationalOverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rational addition overflowed: exact numerator {} needs more than {} bits",
            self.to_big_int(),
            T::BITS
        )
    }
}

impl<T: FixedWidthInteger> std::error::Error for RationalOverflowError<T> {}

/// Error returned by [`checked_lcm`](crate::checked_lcm).
///
/// The exact least common multiple is `high << BITS | low`. Both inputs are
/// taken by magnitude, so no sign word is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeastCommonMultipleOverflowError<T: FixedWidthInteger> {
    /// High word.
    pub high: T::Magnitude,
    /// Low word.
    pub low: T::Magnitude,
}

impl<T: FixedWidthInteger> LeastCommonMultipleOverflowError<T> {
    /// Create an error from its two words.
    #[inline]
    pub fn new(high: T::Magnitude, low: T::Magnitude) -> Self {
        Self { high, low }
    }

    /// Decode the exact least common multiple.
    pub fn to_big_int(&self) -> BigInt {
        (self.high.to_big_int() << T::BITS) + self.low.to_big_int()
    }
}

impl<T: FixedWidthInteger> fmt::Display for LeastCommonMultipleOverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "least common multiple {} does not fit in {} bits",
            self.to_big_int(),
            T::BITS
        )
    }
}

impl<T: FixedWidthInteger> std::error::Error for LeastCommonMultipleOverflowError<T> {}
