// ============================================================================
// Wide Arithmetic Trait
// Abstract interface for the double-width product/quotient step
// ============================================================================

/// Truncated quotient and remainder of `a * b / c`.
///
/// The quotient is carried as `i128`: `|a * b| <= 2^126`, so every quotient
/// fits regardless of the divisor. The remainder always fits in `i64`
/// because `|remainder| < |c|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideQuotient {
    /// `trunc(a * b / c)`, rounded toward zero
    pub quotient: i128,
    /// `(a * b) % c`, carrying the sign of the product
    pub remainder: i64,
    /// Whether `a * b < 0`
    pub product_negative: bool,
}

impl WideQuotient {
    /// Whether the division was exact.
    #[inline]
    pub const fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

/// Trait for double-width multiply-then-divide backends.
///
/// Implementations compute the full 128-bit product of two `i64` values and
/// divide it by an `i64` with truncating semantics. Rounding is applied
/// afterwards, independently of the backend.
///
/// # Thread Safety
/// All implementations must be `Send + Sync` so one backend can be shared
/// by every caller of a [`crate::numeric::ScaledMultiplyDivide`].
///
/// # Preconditions
/// `c != 0`. Callers check this before dispatching to a backend.
pub trait WideArithmetic: Send + Sync {
    /// Compute `trunc(a * b / c)` and `(a * b) % c` without overflow.
    fn div_rem_product(&self, a: i64, b: i64, c: i64) -> WideQuotient;

    /// Get the name of this backend.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name(&self) -> &'static str;
}
