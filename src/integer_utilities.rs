//! Greatest common divisor and least common multiple.
//!
//! All three functions work on magnitudes, so the most negative value of a
//! signed type is handled without overflow.
//!
//! ```
//! use exact_rational::{checked_lcm, gcd, lcm};
//! use num_bigint::BigInt;
//!
//! assert_eq!(gcd(&i64::MIN, &0), 1u64 << 63);
//! assert_eq!(lcm(&BigInt::from(1024), &BigInt::from(768)), BigInt::from(3072));
//! assert_eq!(checked_lcm(&1024i32, &0), Ok(0));
//! ```

use crate::error::LeastCommonMultipleOverflowError;
use crate::integer_trait::{FixedWidthInteger, RationalInteger, UnboundedInteger};

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// `gcd(0, 0) == 0` and `gcd(0, x) == |x|`. The result is returned as the
/// magnitude type because `|T::MIN|` does not fit in a signed `T`.
#[inline]
pub fn gcd<T: RationalInteger>(a: &T, b: &T) -> T::Magnitude {
    <T::Magnitude as RationalInteger>::gcd_nonnegative(a.magnitude(), b.magnitude())
}

/// Least common multiple for arbitrary-precision integers.
///
/// Returns zero if either input is zero; otherwise the non-negative value
/// `|a| / gcd(a, b) * |b|`.
pub fn lcm<T: UnboundedInteger>(a: &T, b: &T) -> T {
    if a.is_zero() || b.is_zero() {
        return T::zero();
    }

    let divisor = T::from_magnitude(gcd(a, b));
    let a = T::from_magnitude(a.magnitude());
    let b = T::from_magnitude(b.magnitude());
    a.div_ref(&divisor).mul_ref(&b)
}

/// Least common multiple for fixed-width integers.
///
/// Computed as `|a| / gcd(a, b) * |b|` with a full-width multiply, so it never
/// wraps. If the result is not representable in `T`, the error carries the
/// exact double-width value.
///
/// ```
/// use exact_rational::{checked_lcm, LeastCommonMultipleOverflowError};
///
/// assert_eq!(checked_lcm(&24u8, &18), Ok(72));
/// assert_eq!(
///     checked_lcm(&i8::MIN, &i8::MAX),
///     Err(LeastCommonMultipleOverflowError::new(63, 128))
/// );
/// ```
pub fn checked_lcm<T: FixedWidthInteger>(
    a: &T,
    b: &T,
) -> Result<T, LeastCommonMultipleOverflowError<T>> {
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }

    let quotient = a.magnitude().div_ref(&gcd(a, b));
    let (high, low) = T::magnitude_multiplied_full_width(&quotient, &b.magnitude());

    if high.is_zero() {
        if let Some(value) = T::from_magnitude_exactly(&low) {
            return Ok(value);
        }
    }

    Err(LeastCommonMultipleOverflowError::new(high, low))
}
