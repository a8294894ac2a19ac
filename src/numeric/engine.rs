// ============================================================================
// Scaled Multiply-Divide Engine
// Configured entry point bundling a backend, a scale and a default rounding
// ============================================================================

use super::config::MultDivConfig;
use super::errors::NumericResult;
use super::mult_div::{multiply_divide_with, power_of_ten, POWERS_OF_TEN};
use super::rounding::RoundingMode;
use crate::wide::{create_native_backend, create_wide_backend, WideArithmetic};
use std::fmt;
use std::sync::Arc;

/// Computes rounded scaled product-quotients on a chosen backend.
///
/// Holds no mutable state; clones share the backend and every method can be
/// called concurrently from any number of threads.
///
/// # Example
/// ```
/// use scaled_multdiv::numeric::{MultDivConfig, RoundingMode, ScaledMultiplyDivide};
///
/// let engine = ScaledMultiplyDivide::from_config(&MultDivConfig::currency()).unwrap();
///
/// // 12.35 * 1.07 = 13.2145 -> 13.21
/// assert_eq!(engine.multiply_scaled(1_235, 107, RoundingMode::HalfEven), Ok(1_321));
/// assert_eq!(engine.multiply_divide(7, 3, 2, RoundingMode::HalfUp), Ok(11));
/// ```
#[derive(Clone)]
pub struct ScaledMultiplyDivide {
    backend: Arc<dyn WideArithmetic>,
    default_rounding: RoundingMode,
    decimals: u8,
    scale: i64,
}

impl ScaledMultiplyDivide {
    /// Create an engine from configuration.
    ///
    /// # Errors
    /// Returns `InvalidScale` if the configured decimals exceed 18.
    pub fn from_config(config: &MultDivConfig) -> NumericResult<Self> {
        config.validate()?;

        let backend = create_wide_backend(config.backend);
        tracing::debug!(
            backend = backend.name(),
            decimals = config.decimals,
            rounding = %config.default_rounding,
            "created scaled multiply-divide engine"
        );

        Ok(Self {
            backend,
            default_rounding: config.default_rounding,
            decimals: config.decimals,
            scale: power_of_ten(config.decimals)?,
        })
    }

    /// Create an engine on an explicit backend.
    ///
    /// # Errors
    /// Returns `InvalidScale` if `decimals` exceeds 18.
    pub fn with_backend(
        backend: Arc<dyn WideArithmetic>,
        default_rounding: RoundingMode,
        decimals: u8,
    ) -> NumericResult<Self> {
        Ok(Self {
            backend,
            default_rounding,
            decimals,
            scale: power_of_ten(decimals)?,
        })
    }

    /// Name of the backend in use.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Default rounding mode.
    pub fn default_rounding(&self) -> RoundingMode {
        self.default_rounding
    }

    /// Configured number of decimals.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// `10^decimals`.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// `round(a * b / c)` under `mode`.
    #[inline]
    pub fn multiply_divide(&self, a: i64, b: i64, c: i64, mode: RoundingMode) -> NumericResult<i64> {
        multiply_divide_with(self.backend.as_ref(), a, b, c, mode)
    }

    /// `round(a * b / c)` under the default rounding mode.
    #[inline]
    pub fn multiply_divide_default(&self, a: i64, b: i64, c: i64) -> NumericResult<i64> {
        self.multiply_divide(a, b, c, self.default_rounding)
    }

    /// Product of two mantissas at the configured scale: `round(a * b / 10^decimals)`.
    #[inline]
    pub fn multiply_scaled(&self, a: i64, b: i64, mode: RoundingMode) -> NumericResult<i64> {
        self.multiply_divide(a, b, self.scale, mode)
    }

    /// Quotient of two mantissas at the configured scale: `round(a * 10^decimals / b)`.
    #[inline]
    pub fn divide_scaled(&self, a: i64, b: i64, mode: RoundingMode) -> NumericResult<i64> {
        self.multiply_divide(a, self.scale, b, mode)
    }

    /// [`Self::multiply_scaled`] under the default rounding mode.
    #[inline]
    pub fn multiply_scaled_default(&self, a: i64, b: i64) -> NumericResult<i64> {
        self.multiply_scaled(a, b, self.default_rounding)
    }

    /// [`Self::divide_scaled`] under the default rounding mode.
    #[inline]
    pub fn divide_scaled_default(&self, a: i64, b: i64) -> NumericResult<i64> {
        self.divide_scaled(a, b, self.default_rounding)
    }
}

impl Default for ScaledMultiplyDivide {
    fn default() -> Self {
        let config = MultDivConfig::default();
        Self {
            backend: create_native_backend(),
            default_rounding: config.default_rounding,
            decimals: config.decimals,
            scale: POWERS_OF_TEN[config.decimals as usize],
        }
    }
}

impl fmt::Debug for ScaledMultiplyDivide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledMultiplyDivide")
            .field("backend", &self.backend.name())
            .field("default_rounding", &self.default_rounding)
            .field("decimals", &self.decimals)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use crate::wide::{LimbWide, WideBackend};
    use std::thread;

    #[test]
    fn test_from_config() {
        let engine = ScaledMultiplyDivide::from_config(&MultDivConfig::default()).unwrap();
        assert_eq!(engine.decimals(), 9);
        assert_eq!(engine.scale(), 1_000_000_000);
        assert_eq!(engine.default_rounding(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_from_config_rejects_bad_scale() {
        let config = MultDivConfig::default().with_decimals(19);
        assert_eq!(
            ScaledMultiplyDivide::from_config(&config).unwrap_err(),
            NumericError::InvalidScale
        );
    }

    #[test]
    fn test_default_matches_default_config() {
        let engine = ScaledMultiplyDivide::default();
        let configured = ScaledMultiplyDivide::from_config(&MultDivConfig::default()).unwrap();
        assert_eq!(engine.scale(), configured.scale());
        assert_eq!(engine.default_rounding(), configured.default_rounding());
        assert_eq!(engine.backend_name(), "NativeI128");
    }

    #[test]
    fn test_limb_backend_engine() {
        let config = MultDivConfig::currency().with_backend(WideBackend::Limb);
        let engine = ScaledMultiplyDivide::from_config(&config).unwrap();
        assert_eq!(engine.backend_name(), "TwoLimb");

        // 19.99 * 3.00 = 59.97
        assert_eq!(engine.multiply_scaled_default(1_999, 300), Ok(5_997));
    }

    #[test]
    fn test_multiply_scaled() {
        let engine = ScaledMultiplyDivide::from_config(&MultDivConfig::currency()).unwrap();

        // 2.50 * 0.05 = 0.125 -> tie, 12 is even
        assert_eq!(engine.multiply_scaled(250, 5, RoundingMode::HalfEven), Ok(12));
        assert_eq!(engine.multiply_scaled(250, 5, RoundingMode::HalfUp), Ok(13));
        assert_eq!(engine.multiply_scaled(-250, 5, RoundingMode::HalfUp), Ok(-13));
        assert_eq!(engine.multiply_scaled(-250, 5, RoundingMode::Ceiling), Ok(-12));
    }

    #[test]
    fn test_divide_scaled() {
        let engine = ScaledMultiplyDivide::from_config(&MultDivConfig::currency()).unwrap();

        // 10.00 / 3.00 = 3.333.. -> 3.33
        assert_eq!(engine.divide_scaled_default(1_000, 300), Ok(333));
        assert_eq!(engine.divide_scaled(1_000, 300, RoundingMode::Up), Ok(334));
        assert_eq!(
            engine.divide_scaled(1_000, 0, RoundingMode::Up),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_exact_engine() {
        let engine = ScaledMultiplyDivide::from_config(&MultDivConfig::exact(2)).unwrap();
        assert_eq!(engine.multiply_scaled_default(200, 150), Ok(300));
        assert_eq!(
            engine.multiply_scaled_default(201, 150),
            Err(NumericError::RoundingUnnecessaryViolation)
        );
    }

    #[test]
    fn test_with_backend() {
        let engine =
            ScaledMultiplyDivide::with_backend(Arc::new(LimbWide::new()), RoundingMode::Down, 0)
                .unwrap();
        assert_eq!(engine.scale(), 1);
        assert_eq!(engine.multiply_divide_default(-7, 3, 2), Ok(-10));
        assert!(ScaledMultiplyDivide::with_backend(
            Arc::new(LimbWide::new()),
            RoundingMode::Down,
            30
        )
        .is_err());
    }

    #[test]
    fn test_debug_output() {
        let engine = ScaledMultiplyDivide::default();
        let debug = format!("{:?}", engine);
        assert!(debug.contains("NativeI128"));
        assert!(debug.contains("HalfEven"));
    }

    #[test]
    fn test_concurrent_use() {
        let engine = ScaledMultiplyDivide::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = engine.clone();
                thread::spawn(move || {
                    (0..1_000i64)
                        .map(|n| engine.multiply_divide(n + i, 3, 2, RoundingMode::HalfUp))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let results = handle.join().unwrap().unwrap();
            let first = i as i64 * 3;
            assert_eq!(results[0], first / 2 + first % 2);
        }
    }
}
