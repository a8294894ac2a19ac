// ============================================================================
// Numeric Module
// Rounded scaled multiply-divide for fixed-point arithmetic
// ============================================================================
//
// This module provides:
// - multiply_divide: round(a * b / c) with a 128-bit intermediate
// - RoundingMode: the eight rounding policies, ordinal-stable
// - NumericError: Error types for arithmetic operations
// - ScaledMultiplyDivide: configured engine over a wide arithmetic backend
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Half modes use the `c >> 1` threshold, also for odd divisors

mod config;
mod engine;
mod errors;
mod mult_div;
mod rounding;

pub use config::MultDivConfig;
pub use engine::ScaledMultiplyDivide;
pub use errors::{NumericError, NumericResult};
pub use mult_div::{
    divide_longs, multiply_and_scale, multiply_divide, multiply_divide_ordinal,
    multiply_divide_with, power_of_ten, scale_and_divide, MAX_DECIMALS, POWERS_OF_TEN,
};
pub use rounding::RoundingMode;
