//! Exact rational number arithmetic over fixed-width and arbitrary-precision
//! integers.
//!
//! This library provides `Rational<T>`, a rational number type that is always
//! kept in lowest terms, generic over any [`RationalInteger`]:
//!
//! - primitive integers (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`),
//! - crypto-bigint unsigned integers (`U64`, `U256`, `U512`, ...),
//! - num-bigint integers (`BigInt`, `BigUint`).
//!
//! # Features
//!
//! - **Canonical form**: every constructor reduces, so equality and hashing are
//!   plain field comparisons.
//! - **Overflow-free comparison**: fixed-width terms compare through a
//!   full-width multiply instead of promoting to a bignum.
//! - **Decodable overflow**: fixed-width addition returns a
//!   [`RationalOverflowError`] holding the exact result instead of wrapping.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_rational::Rational;
//!
//! let half = Rational::<i64>::new(2, 4);
//! assert_eq!(half, Rational::new(1, 2));
//! assert_eq!(*half.numerator(), 1);
//! assert_eq!(*half.denominator(), 2);
//!
//! assert!(Rational::<i8>::new(-9, 4) < Rational::new(-4, 3));
//! assert_eq!(Rational::<i64>::new(6, 5).mixed_number(), (1, Rational::new(1, 5)));
//! ```
//!
//! ## Fixed-Width Addition
//!
//! ```
//! use exact_rational::Rational;
//! use num_bigint::BigInt;
//!
//! let sum = Rational::<i32>::new(1, 8).checked_add(&Rational::new(1, 6));
//! assert_eq!(sum, Ok(Rational::new(7, 24)));
//!
//! let overflow = Rational::<i8>::from(i8::MAX)
//!     .checked_add(&Rational::from(1))
//!     .unwrap_err();
//! assert_eq!(overflow.to_big_int(), BigInt::from(128));
//! ```
//!
//! ## Arbitrary Precision
//!
//! ```
//! use exact_rational::RationalBig;
//! use num_bigint::BigInt;
//!
//! let a = RationalBig::new(BigInt::from(1), BigInt::from(8));
//! let b = RationalBig::new(BigInt::from(1), BigInt::from(6));
//! assert_eq!(a + b, RationalBig::new(BigInt::from(7), BigInt::from(24)));
//! ```

pub mod error;
pub mod integer_trait;
pub mod integer_utilities;

pub use crate::error::{LeastCommonMultipleOverflowError, RationalOverflowError};
pub use crate::integer_trait::{FixedWidthInteger, RationalInteger, UnboundedInteger};
pub use crate::integer_utilities::{checked_lcm, gcd, lcm};

use core::cmp::Ordering;
use core::ops::Add;

use crypto_bigint::Uint;
use num_bigint::{BigInt, BigUint};

/// A rational number in lowest terms.
///
/// # Type Parameter
///
/// `T` must implement [`RationalInteger`]. Additional methods are available
/// when `T` also implements [`FixedWidthInteger`] or [`UnboundedInteger`].
///
/// # Invariants
///
/// - The denominator is always greater than zero.
/// - Numerator and denominator are coprime.
/// - Zero is always represented as `0/1`.
///
/// Because the representation is canonical, the derived `PartialEq` and `Hash`
/// compare and feed the numerator, then the denominator.
///
/// # Examples
///
/// ```
/// use exact_rational::Rational;
///
/// let r = Rational::<i32>::new(-10, 4);
/// assert_eq!(*r.numerator(), -5);
/// assert_eq!(*r.denominator(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T: RationalInteger> {
    numerator: T,
    denominator: T,
}

impl<T: RationalInteger> Rational<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a reduced rational from a numerator and a denominator.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is not greater than zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let r = Rational::<i64>::new(0, 4);
    /// assert_eq!(*r.numerator(), 0);
    /// assert_eq!(*r.denominator(), 1);
    /// ```
    pub fn new(numerator: T, denominator: T) -> Self {
        assert!(
            denominator > T::zero(),
            "Rational denominator must be greater than zero."
        );

        let mut rational = Self {
            numerator,
            denominator,
        };
        rational.reduce();
        rational
    }

    /// Create a rational from parts already known to be in lowest terms.
    #[inline(always)]
    fn from_reduced(numerator: T, denominator: T) -> Self {
        debug_assert!(denominator > T::zero());
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a rational representing 0.
    #[inline]
    pub fn zero() -> Self {
        Self::from_reduced(T::zero(), T::one())
    }

    /// Lift an integer of another type, if it fits in `T` exactly.
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// assert_eq!(Rational::<i8>::exactly(64i64), Some(Rational::from(64)));
    /// assert_eq!(Rational::<i8>::exactly(300i64), None);
    /// ```
    pub fn exactly<S>(source: S) -> Option<Self>
    where
        T: TryFrom<S>,
    {
        T::try_from(source).ok().map(Self::from)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator, carrying the sign of the value.
    #[inline(always)]
    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    /// The denominator, always greater than zero.
    #[inline(always)]
    pub fn denominator(&self) -> &T {
        &self.denominator
    }

    /// Check if the rational is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Check if the rational is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Check if the rational represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator == T::one()
    }

    /// The absolute value, over the magnitude type.
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let r = Rational::<i8>::new(-6, 5);
    /// assert_eq!(r.magnitude(), Rational::<u8>::new(6, 5));
    /// ```
    pub fn magnitude(&self) -> Rational<T::Magnitude> {
        // Coprimality does not depend on sign.
        Rational::from_reduced(self.numerator.magnitude(), self.denominator.magnitude())
    }

    /// Split into a truncated integer part and the remaining fraction.
    ///
    /// The integer part rounds toward zero, so for a non-integral value it
    /// carries the value's sign and the fraction has the same sign.
    ///
    /// ```
    /// use exact_rational::Rational;
    ///
    /// let (integer, fraction) = Rational::<i32>::new(-27, 6).mixed_number();
    /// assert_eq!(integer, -4);
    /// assert_eq!(fraction, Rational::new(-1, 2));
    /// ```
    pub fn mixed_number(&self) -> (T, Self) {
        let (quotient, remainder) = self.numerator.quotient_and_remainder(&self.denominator);
        (quotient, Self::new(remainder, self.denominator.clone()))
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    fn reduce(&mut self) {
        if self.denominator == T::one() {
            return;
        }
        if self.numerator.is_zero() {
            self.denominator = T::one();
            return;
        }

        // gcd <= min(|numerator|, denominator), so it converts back into T
        // and neither division can overflow.
        let divisor = T::from_magnitude(gcd(&self.numerator, &self.denominator));
        if divisor == T::one() {
            return;
        }

        self.numerator = self.numerator.div_ref(&divisor);
        self.denominator = self.denominator.div_ref(&divisor);
    }

    // ========================================================================
    // COMPARISONS
    // ========================================================================

    /// Three-way comparison shared by every ordering operator.
    ///
    /// Denominators are positive, so equal denominators order by numerator.
    /// Otherwise cross products are compared through
    /// [`RationalInteger::compare_products`], which is overflow-free for
    /// fixed-width terms.
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        T::compare_products(
            &self.numerator,
            &other.denominator,
            &other.numerator,
            &self.denominator,
        )
    }

    #[inline]
    fn compare_integer(&self, integer: &T) -> Ordering {
        if self.denominator == T::one() {
            return self.numerator.cmp(integer);
        }

        T::compare_products(&self.numerator, &T::one(), integer, &self.denominator)
    }
}

// ============================================================================
// ARITHMETIC - FIXED-WIDTH ADDITION
// ============================================================================

impl<T: FixedWidthInteger> Rational<T> {
    /// Add two rationals, reporting overflow instead of wrapping.
    ///
    /// Both numerators are scaled to the least common multiple of the
    /// denominators and then added with overflow detection. On overflow the
    /// error encodes the exact numerator of the sum over that common
    /// denominator; see [`RationalOverflowError`].
    ///
    /// # Panics
    ///
    /// Panics if the common denominator, or either scaled numerator, does not
    /// fit in `T`. Those values need more than the error's `2 * BITS + 1` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_rational::{Rational, RationalOverflowError};
    ///
    /// let a = Rational::<u8>::from(u8::MAX);
    /// let err = a.checked_add(&Rational::from(1)).unwrap_err();
    /// assert_eq!(err, RationalOverflowError::new(false, 1, 0));
    ///
    /// // 1/16 + 1/24 scales to 3/48 + 2/48 without leaving i8.
    /// let sum = Rational::<i8>::new(1, 16).checked_add(&Rational::new(1, 24));
    /// assert_eq!(sum, Ok(Rational::new(5, 48)));
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self, RationalOverflowError<T>> {
        let (lhs, rhs, denominator) = if self.denominator == other.denominator {
            (self.numerator, other.numerator, self.denominator)
        } else {
            self.scaled_to_common_denominator(other)
        };

        let (numerator, overflow) = lhs.adding_reporting_overflow(&rhs);
        if overflow {
            return Err(RationalOverflowError::from_wrapped_sum(&lhs, &rhs, &numerator));
        }

        Ok(Self::new(numerator, denominator))
    }

    /// Numerators of `self` and `other` over the lcm of their denominators.
    fn scaled_to_common_denominator(&self, other: &Self) -> (T, T, T) {
        let denominator = match checked_lcm(&self.denominator, &other.denominator) {
            Ok(denominator) => denominator,
            Err(_) => panic!("rational addition overflowed while scaling to a common denominator"),
        };

        let (lhs, lhs_overflow) = self
            .numerator
            .multiplied_reporting_overflow(&denominator.div_ref(&self.denominator));
        let (rhs, rhs_overflow) = other
            .numerator
            .multiplied_reporting_overflow(&denominator.div_ref(&other.denominator));

        if lhs_overflow || rhs_overflow {
            panic!("rational addition overflowed while scaling to a common denominator");
        }

        (lhs, rhs, denominator)
    }

    /// Add an integer, reporting overflow instead of wrapping.
    ///
    /// `integer * denominator + numerator` is computed at double width, so this
    /// never panics. On overflow the error encodes that exact numerator over
    /// the unchanged denominator.
    ///
    /// ```
    /// use exact_rational::Rational;
    /// use num_bigint::BigInt;
    ///
    /// let r = Rational::<i16>::new(3, 4);
    /// assert_eq!(r.checked_add_integer(5), Ok(Rational::new(23, 4)));
    ///
    /// let err = Rational::<i8>::new(1, 2).checked_add_integer(100).unwrap_err();
    /// assert_eq!(err.to_big_int(), BigInt::from(201));
    /// ```
    pub fn checked_add_integer(&self, integer: T) -> Result<Self, RationalOverflowError<T>> {
        let (high, low) = integer.multiplied_adding_full_width(&self.denominator, &self.numerator);

        // The value fits in T exactly when sign-extending its low word
        // reproduces the full-width pair.
        let numerator = T::from_magnitude(low.clone());
        if numerator.multiplied_full_width(&T::one()) == (high, low.clone()) {
            // gcd(k * d + n, d) == gcd(n, d) == 1
            return Ok(Self::from_reduced(numerator, self.denominator));
        }

        Err(RationalOverflowError::from_full_width(&high, low))
    }
}

// ============================================================================
// ARITHMETIC - UNBOUNDED ADDITION
// ============================================================================

impl<T: UnboundedInteger> Rational<T> {
    /// Add two rationals. Arbitrary-precision terms cannot overflow.
    ///
    /// ```
    /// use exact_rational::Rational;
    /// use num_bigint::BigInt;
    ///
    /// let a = Rational::new(BigInt::from(1), BigInt::from(2));
    /// let b = Rational::new(BigInt::from(-2), BigInt::from(3));
    /// assert_eq!(a.add(&b), Rational::new(BigInt::from(-1), BigInt::from(6)));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            return Self::new(
                self.numerator.add_ref(&other.numerator),
                self.denominator.clone(),
            );
        }

        let lhs = self.numerator.mul_ref(&other.denominator);
        let rhs = other.numerator.mul_ref(&self.denominator);
        Self::new(
            lhs.add_ref(&rhs),
            self.denominator.mul_ref(&other.denominator),
        )
    }

    /// Add an integer. Both operand orders of `+` route here.
    pub fn add_integer(&self, integer: &T) -> Self {
        if self.denominator == T::one() {
            return Self::from(integer.add_ref(&self.numerator));
        }

        Self::new(
            integer
                .mul_ref(&self.denominator)
                .add_ref(&self.numerator),
            self.denominator.clone(),
        )
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RationalInteger> Default for Rational<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RationalInteger> From<T> for Rational<T> {
    #[inline]
    fn from(integer: T) -> Self {
        Self::from_reduced(integer, T::one())
    }
}

impl<T: RationalInteger> PartialOrd for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !(other < self)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other < self
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !(self < other)
    }
}

impl<T: RationalInteger> Ord for Rational<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: RationalInteger> PartialEq<T> for Rational<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.denominator == T::one() && self.numerator == *other
    }
}

impl<T: RationalInteger> PartialOrd<T> for Rational<T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.compare_integer(other))
    }
}

impl<T: UnboundedInteger> Add for Rational<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Rational::add(&self, &other)
    }
}

impl<T: UnboundedInteger> Add for &Rational<T> {
    type Output = Rational<T>;
    #[inline]
    fn add(self, other: Self) -> Rational<T> {
        Rational::add(self, other)
    }
}

impl<T: UnboundedInteger> Add<T> for Rational<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: T) -> Self {
        self.add_integer(&other)
    }
}

/// Macro to implement `integer == rational` and `integer < rational`.
macro_rules! impl_integer_comparisons {
    ($($t:ty),* $(,)?) => {$(
        impl PartialEq<Rational<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Rational<$t>) -> bool {
                other == self
            }
        }

        impl PartialOrd<Rational<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Rational<$t>) -> Option<Ordering> {
                Some(other.compare_integer(self).reverse())
            }
        }
    )*};
}

/// Macro to implement `+` returning `Result` for fixed-width terms.
macro_rules! impl_checked_add_operator {
    ($($t:ty),* $(,)?) => {$(
        impl Add for Rational<$t> {
            type Output = Result<Self, RationalOverflowError<$t>>;
            #[inline]
            fn add(self, other: Self) -> Self::Output {
                self.checked_add(&other)
            }
        }
    )*};
}

/// Macro to implement `integer + rational` for unbounded terms.
macro_rules! impl_integer_add {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Rational<$t>> for $t {
            type Output = Rational<$t>;
            #[inline]
            fn add(self, other: Rational<$t>) -> Rational<$t> {
                other.add_integer(&self)
            }
        }
    )*};
}

impl_integer_comparisons!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, BigUint
);
impl_checked_add_operator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_integer_add!(BigInt, BigUint);

impl<const LIMBS: usize> PartialEq<Rational<Uint<LIMBS>>> for Uint<LIMBS> {
    #[inline]
    fn eq(&self, other: &Rational<Uint<LIMBS>>) -> bool {
        other == self
    }
}

impl<const LIMBS: usize> PartialOrd<Rational<Uint<LIMBS>>> for Uint<LIMBS> {
    #[inline]
    fn partial_cmp(&self, other: &Rational<Uint<LIMBS>>) -> Option<Ordering> {
        Some(other.compare_integer(self).reverse())
    }
}

impl<const LIMBS: usize> Add for Rational<Uint<LIMBS>> {
    type Output = Result<Self, RationalOverflowError<Uint<LIMBS>>>;
    #[inline]
    fn add(self, other: Self) -> Self::Output {
        self.checked_add(&other)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Rational using 32-bit signed integers.
pub type RationalI32 = Rational<i32>;

/// Rational using 64-bit signed integers.
pub type RationalI64 = Rational<i64>;

/// Rational using 128-bit signed integers.
pub type RationalI128 = Rational<i128>;

/// Rational using 256-bit unsigned integers.
pub type RationalU256 = Rational<crypto_bigint::U256>;

/// Rational using 512-bit unsigned integers.
pub type RationalU512 = Rational<crypto_bigint::U512>;

/// Rational using arbitrary-precision signed integers.
pub type RationalBig = Rational<BigInt>;

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::U256;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_is_zero() {
        let r = Rational::<i64>::default();
        assert_eq!(*r.numerator(), 0);
        assert_eq!(*r.denominator(), 1);

        let r = RationalBig::default();
        assert_eq!(*r.numerator(), BigInt::from(0));
        assert_eq!(*r.denominator(), BigInt::from(1));
    }

    #[test]
    fn test_from_integer() {
        let r = Rational::from(i64::MIN);
        assert_eq!(*r.numerator(), i64::MIN);
        assert_eq!(*r.denominator(), 1);

        let n = big("340282366920938463463374607431768211507");
        let r = Rational::from(n.clone());
        assert_eq!(*r.numerator(), n);
        assert_eq!(*r.denominator(), BigInt::from(1));
    }

    #[test]
    fn test_new_reduces() {
        let r = Rational::<i64>::new(2, 4);
        assert_eq!((*r.numerator(), *r.denominator()), (1, 2));

        let r = Rational::<i64>::new(0, 4);
        assert_eq!((*r.numerator(), *r.denominator()), (0, 1));

        let r = Rational::<i64>::new(2, 1);
        assert_eq!((*r.numerator(), *r.denominator()), (2, 1));

        let r = Rational::<i64>::new(i64::MIN, 1);
        assert_eq!((*r.numerator(), *r.denominator()), (i64::MIN, 1));

        let r = Rational::<i64>::new(i64::MIN, 2);
        assert_eq!((*r.numerator(), *r.denominator()), (i64::MIN / 2, 1));

        let n = big("340282366920938463463374607431768211508");
        let r = Rational::new(n.clone(), BigInt::from(2));
        assert_eq!(*r.numerator(), n / 2);
        assert_eq!(*r.denominator(), BigInt::from(1));
    }

    #[test]
    fn test_new_reduces_min_over_max() {
        let r = Rational::<i8>::new(i8::MIN, i8::MAX);
        assert_eq!((*r.numerator(), *r.denominator()), (i8::MIN, i8::MAX));

        let r = Rational::<i8>::new(i8::MIN, 64);
        assert_eq!((*r.numerator(), *r.denominator()), (-2, 1));
    }

    #[test]
    #[should_panic(expected = "Rational denominator must be greater than zero.")]
    fn test_zero_denominator_panics() {
        let _ = Rational::<i64>::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "Rational denominator must be greater than zero.")]
    fn test_negative_denominator_panics() {
        let _ = Rational::<i64>::new(i64::MAX, -1);
    }

    #[test]
    #[should_panic(expected = "Rational denominator must be greater than zero.")]
    fn test_zero_denominator_panics_big_int() {
        let _ = Rational::new(BigInt::from(1), BigInt::from(0));
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(
            Rational::<i64>::new(5, 6).mixed_number(),
            (0, Rational::new(5, 6))
        );
        assert_eq!(
            Rational::<i64>::new(6, 5).mixed_number(),
            (1, Rational::new(1, 5))
        );
        assert_eq!(
            Rational::<i64>::new(-27, 6).mixed_number(),
            (-4, Rational::new(-1, 2))
        );

        let denominator = big("457425209663695646359203630886756382027");
        let remainder = big("340282366920938463463374607431768211507");
        let numerator = &denominator * 4 + &remainder;
        assert_eq!(
            Rational::new(numerator, denominator.clone()).mixed_number(),
            (BigInt::from(4), Rational::new(remainder, denominator))
        );
    }

    #[test]
    fn test_equality_with_integer() {
        assert!(Rational::<i64>::new(-10, 2) == -5);
        assert!(Rational::<i64>::new(0, 6) == 0);
        assert!(-7 == Rational::<i64>::new(-14, 2));
        assert!(0 == Rational::<i64>::new(0, 1));
        assert!(Rational::<i64>::new(-3, 2) != -5);
        assert!(Rational::<i64>::new(0, 6) != 10);
        assert!(-7 != Rational::<i64>::new(-15, 2));
        assert!(1 != Rational::<i64>::new(0, 1));

        let n = big("340282366920938463463374607431768211507");
        assert!(Rational::new(&n * 2, BigInt::from(2)) == n);
        assert!(n == Rational::new(&n * 2, BigInt::from(2)));
    }

    #[test]
    fn test_ordering_with_integer() {
        assert!(Rational::<i64>::new(7, 2) > 3);
        assert!(Rational::<i64>::new(7, 2) < 4);
        assert!(Rational::<i64>::new(-7, 2) < -3);
        assert!(3 < Rational::<i64>::new(7, 2));
        assert!(4 >= Rational::<i64>::new(8, 2));
        assert!(i8::MIN < Rational::<i8>::new(i8::MIN, i8::MAX));
    }

    #[test]
    fn test_hash_consistency() {
        assert_eq!(
            hash_of(&Rational::<i64>::new(3, 7)),
            hash_of(&Rational::<i64>::new(6, 14))
        );
        assert_eq!(
            hash_of(&Rational::<i64>::new(21, 7)),
            hash_of(&Rational::<i64>::from(3))
        );
        assert_ne!(
            hash_of(&Rational::<i64>::new(21, 8)),
            hash_of(&Rational::<i64>::from(3))
        );
        assert_ne!(
            hash_of(&Rational::<i64>::new(3, 7)),
            hash_of(&Rational::<i64>::new(7, 3))
        );

        let common = big("457425209663695646359203630886756382027");
        let prime1 = big("340282366920938463463374607431768211507");
        let prime2 = big("391658961466960540800131805247996205641");
        assert_eq!(
            hash_of(&Rational::new(&prime1 * &common, &prime2 * &common)),
            hash_of(&Rational::new(prime1, prime2))
        );
    }

    #[test]
    fn test_exactly() {
        assert_eq!(Rational::<i64>::exactly(64u8), Some(Rational::from(64)));
        assert_eq!(RationalBig::exactly(64), Some(Rational::from(BigInt::from(64))));
        assert_eq!(Rational::<i64>::exactly(u128::MAX), None);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(
            Rational::<i64>::new(6, 5).magnitude(),
            Rational::<i64>::new(-6, 5).magnitude()
        );
        assert_eq!(Rational::<i8>::from(i8::MIN).magnitude(), Rational::from(128u8));

        let n = big("340282366920938463463374607431768211507");
        assert_eq!(
            Rational::new(n.clone(), BigInt::from(5)).magnitude(),
            Rational::new(-n, BigInt::from(5)).magnitude()
        );
    }

    #[test]
    fn test_predicates() {
        assert!(Rational::<i64>::zero().is_zero());
        assert!(Rational::<i64>::zero().is_integer());
        assert!(Rational::<i64>::new(-1, 2).is_negative());
        assert!(!Rational::<i64>::new(1, 2).is_negative());
        assert!(!Rational::<i64>::new(5, 2).is_integer());
        assert!(Rational::<i64>::new(10, 2).is_integer());
    }

    #[test]
    fn test_big_int_addition() {
        let r = |n: i64, d: i64| Rational::new(BigInt::from(n), BigInt::from(d));

        assert_eq!(r(1, 8) + r(1, 8), r(1, 4));
        assert_eq!(r(1, 8) + r(1, 6), r(7, 24));
        assert_eq!(r(1, 2) + r(-2, 3), r(-1, 6));
        assert_eq!(r(-2, 7) + r(-1, 3), r(-13, 21));
        assert_eq!(r(-3, 5) + r(5, 7), r(4, 35));
        assert_eq!(
            r(i64::MAX / 4, 8) + r(i64::MAX / 4, 4),
            r(6917529027641081853, 8)
        );
        assert_eq!(&r(1, 3) + &r(2, 3), r(1, 1));
    }

    #[test]
    fn test_big_int_mixed_addition() {
        let r = |n: i64, d: i64| Rational::new(BigInt::from(n), BigInt::from(d));

        assert_eq!(BigInt::from(0) + r(3, 4), r(3, 4));
        assert_eq!(BigInt::from(5) + r(3, 4), r(23, 4));
        assert_eq!(r(3, 4) + BigInt::from(0), r(3, 4));
        assert_eq!(r(3, 4) + BigInt::from(5), r(23, 4));
        assert_eq!(r(4, 1) + BigInt::from(-5), r(-1, 1));
    }

    #[test]
    fn test_checked_add() {
        let r = |n: i32, d: i32| Rational::<i32>::new(n, d);

        assert_eq!(r(1, 8).checked_add(&r(1, 8)), Ok(r(1, 4)));
        assert_eq!(r(1, 8).checked_add(&r(1, 6)), Ok(r(7, 24)));
        assert_eq!(r(1, 2).checked_add(&r(-2, 3)), Ok(r(-1, 6)));
        assert_eq!(r(-2, 7) + r(-1, 3), Ok(r(-13, 21)));
        assert_eq!(r(-3, 5) + r(5, 7), Ok(r(4, 35)));
    }

    #[test]
    fn test_checked_add_overflow() {
        let err = (Rational::<i8>::from(i8::MIN) + Rational::<i8>::from(-1)).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(i16::from(i8::MIN) - 1));

        let err = (Rational::<i8>::from(i8::MAX) + Rational::<i8>::from(1)).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(i16::from(i8::MAX) + 1));

        let err = (Rational::<u8>::from(u8::MAX) + Rational::<u8>::from(1)).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(u16::from(u8::MAX) + 1));
    }

    #[test]
    fn test_checked_add_overflow_shared_denominator() {
        let err = Rational::<i8>::new(127, 2)
            .checked_add(&Rational::new(125, 2))
            .unwrap_err();
        assert_eq!(err, RationalOverflowError::new(false, 0, 252));
        assert_eq!(err.to_big_int(), BigInt::from(252));
    }

    #[test]
    #[should_panic(expected = "scaling to a common denominator")]
    fn test_checked_add_scaled_numerator_overflow_panics() {
        let _ = Rational::<i8>::new(127, 2).checked_add(&Rational::new(127, 3));
    }

    #[test]
    #[should_panic(expected = "scaling to a common denominator")]
    fn test_checked_add_common_denominator_overflow_panics() {
        let _ = Rational::<i8>::new(1, 16).checked_add(&Rational::new(1, 17));
    }

    #[test]
    fn test_checked_add_scales_to_lcm() {
        // d1 * d2 = 384 would not fit, lcm 48 does
        assert_eq!(
            Rational::<i8>::new(1, 16).checked_add(&Rational::new(1, 24)),
            Ok(Rational::new(5, 48))
        );
        assert_eq!(
            Rational::<i8>::new(1, 6).checked_add(&Rational::new(1, 3)),
            Ok(Rational::new(1, 2))
        );
        assert_eq!(
            Rational::<u8>::new(1, 100).checked_add(&Rational::new(1, 50)),
            Ok(Rational::new(3, 100))
        );
    }

    #[test]
    fn test_checked_add_unlike_denominators_overflow_decodes() {
        // 63/2 + 65/4 = (126 + 65)/4
        let err = Rational::<i8>::new(63, 2)
            .checked_add(&Rational::new(65, 4))
            .unwrap_err();
        assert_eq!(err, RationalOverflowError::new(false, 0, 191));
        assert_eq!(err.to_big_int(), BigInt::from(191));
    }

    #[test]
    fn test_checked_add_integer() {
        let r = Rational::<i16>::new(3, 4);
        assert_eq!(r.checked_add_integer(0), Ok(r));
        assert_eq!(r.checked_add_integer(5), Ok(Rational::new(23, 4)));
        assert_eq!(r.checked_add_integer(-1), Ok(Rational::new(-1, 4)));

        let err = Rational::<i16>::from(i16::MAX)
            .checked_add_integer(1)
            .unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(32768));
    }

    #[test]
    fn test_checked_add_integer_near_bounds() {
        assert_eq!(
            Rational::<i8>::new(-1, 2).checked_add_integer(64),
            Ok(Rational::new(127, 2))
        );
        assert_eq!(
            Rational::<i8>::new(1, 2).checked_add_integer(-64),
            Ok(Rational::new(-127, 2))
        );
        assert_eq!(
            Rational::<u8>::new(1, 3).checked_add_integer(84),
            Ok(Rational::new(253, 3))
        );
    }

    #[test]
    fn test_checked_add_integer_overflow_decodes() {
        let err = Rational::<i8>::new(1, 2).checked_add_integer(64).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(129));

        let err = Rational::<i8>::new(-1, 2).checked_add_integer(i8::MIN).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(-257));

        let err = Rational::<i8>::from(i8::MIN).checked_add_integer(-1).unwrap_err();
        assert_eq!(err, RationalOverflowError::new(true, 0xFF, 0x7F));

        let err = Rational::<u8>::new(254, 255).checked_add_integer(u8::MAX).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(255 * 255 + 254));
    }

    #[test]
    fn test_uint_rational() {
        let a = Rational::new(U256::from_u64(2), U256::from_u64(4));
        assert_eq!(*a.numerator(), U256::ONE);
        assert_eq!(*a.denominator(), U256::from_u64(2));

        let b = RationalU256::new(U256::from_u64(1), U256::from_u64(3));
        assert!(b < a);
        assert_eq!(a + b, Ok(RationalU256::new(U256::from_u64(5), U256::from_u64(6))));

        let max = RationalU256::from(U256::MAX);
        let err = (max + RationalU256::from(U256::ONE)).unwrap_err();
        assert_eq!(err.to_big_int(), BigInt::from(1u8) << 256);
        assert!(U256::MAX == max);
    }
}
