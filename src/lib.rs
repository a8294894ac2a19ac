// ============================================================================
// Scaled Multiply-Divide Library
// Rounded 64x64/64 multiply-divide with a 128-bit intermediate
// ============================================================================

//! # Scaled Multiply-Divide
//!
//! Computes `round(a * b / c)` for `i64` operands under one of eight rounding
//! modes, forming the product in 128 bits so the full input range is safe.
//! This is the rescaling step behind fixed-point decimal multiplication and
//! division.
//!
//! ## Features
//!
//! - **128-bit intermediate** on native `i128` or portable two-limb `u64`
//! - **Eight rounding modes** with stable ordinals (UP .. UNNECESSARY)
//! - **Typed errors** for inexact `UNNECESSARY`, division by zero and
//!   out-of-range results
//! - **Stateless**: every operation is a pure function, safe from any thread
//!
//! ## Example
//!
//! ```rust
//! use scaled_multdiv::prelude::*;
//!
//! // 7 * 3 / 2 = 10.5
//! assert_eq!(multiply_divide(7, 3, 2, RoundingMode::HalfUp), Ok(11));
//! assert_eq!(multiply_divide(7, 3, 2, RoundingMode::HalfEven), Ok(10));
//! assert_eq!(
//!     multiply_divide(7, 3, 2, RoundingMode::Unnecessary),
//!     Err(NumericError::RoundingUnnecessaryViolation)
//! );
//!
//! // Rescale the product of two 9-decimal mantissas: 1.5 * 1.5 = 2.25
//! let engine = ScaledMultiplyDivide::default();
//! assert_eq!(engine.multiply_scaled_default(1_500_000_000, 1_500_000_000), Ok(2_250_000_000));
//! ```

#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod wide;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        divide_longs, multiply_and_scale, multiply_divide, multiply_divide_ordinal,
        scale_and_divide, MultDivConfig, NumericError, NumericResult, RoundingMode,
        ScaledMultiplyDivide,
    };
    pub use crate::wide::{create_wide_backend, WideArithmetic, WideBackend};
}
