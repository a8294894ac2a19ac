// ============================================================================
// Two-Limb Backend
// Portable 64x64->128 multiply and 128/64 divide on u64 limbs
// ============================================================================

use super::traits::{WideArithmetic, WideQuotient};

const LOW_32: u64 = 0xFFFF_FFFF;

/// Backend computing the wide product on pairs of `u64` limbs.
///
/// Works in sign-magnitude form: the magnitudes are multiplied and divided
/// as unsigned values and the signs are reapplied to quotient and remainder
/// afterwards. Only the final quotient is assembled into an `i128`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimbWide;

impl LimbWide {
    /// Create a new two-limb backend.
    pub fn new() -> Self {
        Self
    }
}

/// Full 128-bit product of two `u64` values, as `(hi, lo)` limbs.
///
/// Schoolbook multiplication on 32-bit halves; no partial sum can overflow.
#[inline]
pub fn widening_mul(x: u64, y: u64) -> (u64, u64) {
    let (x_hi, x_lo) = (x >> 32, x & LOW_32);
    let (y_hi, y_lo) = (y >> 32, y & LOW_32);

    let ll = x_lo * y_lo;
    let lh = x_lo * y_hi;
    let hl = x_hi * y_lo;
    let hh = x_hi * y_hi;

    // three terms below 2^32 each
    let mid = (ll >> 32) + (lh & LOW_32) + (hl & LOW_32);

    let lo = (ll & LOW_32) | (mid << 32);
    let hi = hh + (lh >> 32) + (hl >> 32) + (mid >> 32);
    (hi, lo)
}

/// Divide the 128-bit value `(hi, lo)` by `d`.
///
/// Returns `(q_hi, q_lo, rem)`. The high limb is divided natively, the low
/// limb by restoring shift-subtract division, one quotient bit per step.
///
/// # Panics
/// Panics if `d == 0`.
#[inline]
pub fn div_rem_128_by_64(hi: u64, lo: u64, d: u64) -> (u64, u64, u64) {
    let q_hi = hi / d;
    let mut rem = hi % d;
    let mut q_lo = 0u64;

    for bit in (0..64).rev() {
        // rem < d, but rem << 1 may still carry out of 64 bits when d > 2^63
        let carry = rem >> 63 == 1;
        rem = (rem << 1) | ((lo >> bit) & 1);
        q_lo <<= 1;
        if carry || rem >= d {
            rem = rem.wrapping_sub(d);
            q_lo |= 1;
        }
    }

    (q_hi, q_lo, rem)
}

impl WideArithmetic for LimbWide {
    fn div_rem_product(&self, a: i64, b: i64, c: i64) -> WideQuotient {
        let (p_hi, p_lo) = widening_mul(a.unsigned_abs(), b.unsigned_abs());
        let (q_hi, q_lo, rem) = div_rem_128_by_64(p_hi, p_lo, c.unsigned_abs());

        let product_nonzero = (p_hi | p_lo) != 0;
        let product_negative = product_nonzero && ((a < 0) != (b < 0));
        let quotient_negative = product_negative != (c < 0);

        // |product| <= 2^126 keeps the magnitude clear of the i128 sign bit
        let magnitude = ((q_hi as i128) << 64) | (q_lo as i128);
        let quotient = if quotient_negative {
            -magnitude
        } else {
            magnitude
        };

        // rem < |c| <= 2^63, and rem == 2^63 is impossible
        let remainder = if product_negative {
            -(rem as i64)
        } else {
            rem as i64
        };

        WideQuotient {
            quotient,
            remainder,
            product_negative,
        }
    }

    fn name(&self) -> &'static str {
        "TwoLimb"
    }
}
