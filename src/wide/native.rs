// ============================================================================
// Native i128 Backend
// Uses the compiler's 128-bit integer support for the wide step
// ============================================================================

use super::traits::{WideArithmetic, WideQuotient};

/// Backend built on Rust's native `i128`.
///
/// On 64-bit targets the multiply lowers to a single widening multiply
/// instruction and the divide to a runtime-library 128/128 division.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeWide;

impl NativeWide {
    /// Create a new native backend.
    pub fn new() -> Self {
        Self
    }

    /// The backend as a free function, for call sites that avoid dynamic dispatch.
    #[inline(always)]
    pub fn div_rem(a: i64, b: i64, c: i64) -> WideQuotient {
        // |a * b| <= 2^126, so neither the product nor `product / -1` can overflow
        let product = (a as i128) * (b as i128);
        let divisor = c as i128;

        WideQuotient {
            quotient: product / divisor,
            remainder: (product % divisor) as i64,
            product_negative: product < 0,
        }
    }
}

impl WideArithmetic for NativeWide {
    #[inline]
    fn div_rem_product(&self, a: i64, b: i64, c: i64) -> WideQuotient {
        Self::div_rem(a, b, c)
    }

    fn name(&self) -> &'static str {
        "NativeI128"
    }
}
