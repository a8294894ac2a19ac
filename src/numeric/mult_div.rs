// ============================================================================
// Scaled Multiply-Divide
// round(a * b / c) with a 128-bit intermediate and selectable rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use crate::wide::{NativeWide, WideArithmetic, WideQuotient};
use std::cmp::Ordering;

/// Powers of ten representable in an i64, indexed by decimal scale.
pub const POWERS_OF_TEN: [i64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Largest supported decimal scale.
pub const MAX_DECIMALS: u8 = 18;

/// `10^decimals`.
///
/// # Errors
/// Returns `InvalidScale` if `decimals > 18`.
#[inline]
pub fn power_of_ten(decimals: u8) -> NumericResult<i64> {
    POWERS_OF_TEN
        .get(decimals as usize)
        .copied()
        .ok_or(NumericError::InvalidScale)
}

// ============================================================================
// Core Primitive
// ============================================================================

/// Compute `round(a * b / c)` under `mode`.
///
/// The product is formed in 128 bits, so any pair of `i64` operands is
/// accepted. Only the final rounded quotient must fit in an `i64`.
///
/// Half modes compare the remainder against `c >> 1`. For odd divisors that
/// threshold sits half a unit below the exact midpoint; existing callers rely
/// on it, so it is kept as is.
///
/// # Errors
/// - `DivisionByZero` if `c == 0`
/// - `RoundingUnnecessaryViolation` if `mode` is `Unnecessary` and the
///   division is inexact
/// - `Overflow` / `Underflow` if the rounded quotient does not fit in an i64
///
/// # Example
/// ```
/// use scaled_multdiv::numeric::{multiply_divide, RoundingMode};
///
/// assert_eq!(multiply_divide(7, 3, 2, RoundingMode::HalfUp), Ok(11));
/// assert_eq!(multiply_divide(7, 3, 2, RoundingMode::HalfEven), Ok(10));
/// assert_eq!(multiply_divide(-7, 3, 2, RoundingMode::Floor), Ok(-11));
/// ```
#[inline]
pub fn multiply_divide(a: i64, b: i64, c: i64, mode: RoundingMode) -> NumericResult<i64> {
    if c == 0 {
        return Err(NumericError::DivisionByZero);
    }
    round_quotient(NativeWide::div_rem(a, b, c), c, mode)
}

/// [`multiply_divide`] on an explicit wide-arithmetic backend.
pub fn multiply_divide_with<W: WideArithmetic + ?Sized>(
    backend: &W,
    a: i64,
    b: i64,
    c: i64,
    mode: RoundingMode,
) -> NumericResult<i64> {
    if c == 0 {
        return Err(NumericError::DivisionByZero);
    }
    round_quotient(backend.div_rem_product(a, b, c), c, mode)
}

/// [`multiply_divide`] taking the rounding mode as a persisted ordinal.
///
/// Ordinals outside 0..=7 fall back to `Down`, plain truncation.
pub fn multiply_divide_ordinal(a: i64, b: i64, c: i64, ordinal: i32) -> NumericResult<i64> {
    let mode = RoundingMode::from_ordinal(ordinal).unwrap_or_else(|| {
        tracing::trace!(ordinal, "unrecognized rounding ordinal, truncating");
        RoundingMode::Down
    });
    multiply_divide(a, b, c, mode)
}

/// Apply `mode` to a truncated quotient/remainder pair and narrow to i64.
pub(crate) fn round_quotient(q: WideQuotient, c: i64, mode: RoundingMode) -> NumericResult<i64> {
    let WideQuotient {
        quotient: tmp,
        remainder: rem,
        product_negative: negative,
    } = q;

    if rem == 0 {
        // exact: every mode agrees
        return narrow(tmp);
    }

    let half = c >> 1;
    let rounded = match mode {
        RoundingMode::Up => {
            if negative {
                tmp - 1
            } else {
                tmp + 1
            }
        },
        RoundingMode::Down => tmp,
        RoundingMode::Ceiling => {
            if negative {
                tmp
            } else {
                tmp + 1
            }
        },
        RoundingMode::Floor => {
            if negative {
                tmp - 1
            } else {
                tmp
            }
        },
        RoundingMode::HalfUp => {
            if !negative {
                tmp + i128::from(rem >= half)
            } else {
                tmp - i128::from(rem <= -half)
            }
        },
        RoundingMode::HalfDown => {
            if !negative {
                tmp + i128::from(rem > half)
            } else {
                tmp - i128::from(rem < -half)
            }
        },
        RoundingMode::HalfEven => {
            if !negative {
                match rem.cmp(&half) {
                    Ordering::Greater => tmp + 1,
                    Ordering::Less => tmp,
                    Ordering::Equal => tmp + (tmp & 1),
                }
            } else {
                match rem.cmp(&-half) {
                    Ordering::Less => tmp - 1,
                    Ordering::Greater => tmp,
                    Ordering::Equal => tmp - (tmp & 1),
                }
            }
        },
        RoundingMode::Unnecessary => {
            tracing::trace!(quotient = %tmp, remainder = rem, divisor = c, "inexact division under UNNECESSARY");
            return Err(NumericError::RoundingUnnecessaryViolation);
        },
    };

    narrow(rounded)
}

#[inline]
fn narrow(value: i128) -> NumericResult<i64> {
    i64::try_from(value).map_err(|_| NumericError::out_of_range(value < 0))
}

// ============================================================================
// Scaling Helpers
// ============================================================================

/// Multiply two mantissas and drop `decimals` digits: `round(a * b / 10^decimals)`.
///
/// This is the rescaling step of a fixed-point multiplication where the
/// operands together carry `decimals` more fractional digits than the target.
///
/// # Errors
/// `InvalidScale` for `decimals > 18`, otherwise as [`multiply_divide`].
#[inline]
pub fn multiply_and_scale(a: i64, b: i64, decimals: u8, mode: RoundingMode) -> NumericResult<i64> {
    multiply_divide(a, b, power_of_ten(decimals)?, mode)
}

/// Add `decimals` digits to a mantissa, then divide: `round(mantissa * 10^decimals / divisor)`.
///
/// # Errors
/// `InvalidScale` for `decimals > 18`, otherwise as [`multiply_divide`].
#[inline]
pub fn scale_and_divide(
    mantissa: i64,
    decimals: u8,
    divisor: i64,
    mode: RoundingMode,
) -> NumericResult<i64> {
    multiply_divide(mantissa, power_of_ten(decimals)?, divisor, mode)
}

/// `round(a / b)` under `mode`, without a wide intermediate.
///
/// Uses the same rounding table as [`multiply_divide`] with `a` in place of
/// the product.
///
/// # Errors
/// - `DivisionByZero` if `b == 0`
/// - `Overflow` for `i64::MIN / -1`
/// - `RoundingUnnecessaryViolation` as for [`multiply_divide`]
pub fn divide_longs(a: i64, b: i64, mode: RoundingMode) -> NumericResult<i64> {
    if b == 0 {
        return Err(NumericError::DivisionByZero);
    }
    let tmp = a.checked_div(b).ok_or(NumericError::Overflow)?;
    let q = WideQuotient {
        quotient: tmp as i128,
        remainder: a % b,
        product_negative: a < 0,
    };
    round_quotient(q, b, mode)
}
