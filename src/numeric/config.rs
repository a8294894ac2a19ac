// ============================================================================
// Multiply-Divide Configuration
// Default rounding, decimal scale and backend selection for an engine
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::mult_div::MAX_DECIMALS;
use super::rounding::RoundingMode;
use crate::wide::WideBackend;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`super::ScaledMultiplyDivide`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultDivConfig {
    /// Rounding mode used by the `*_default` operations
    pub default_rounding: RoundingMode,

    /// Number of fractional digits carried by the mantissas (0..=18)
    pub decimals: u8,

    /// Double-width arithmetic backend
    pub backend: WideBackend,
}

impl MultDivConfig {
    /// Create a new configuration with the automatic backend
    pub fn new(default_rounding: RoundingMode, decimals: u8) -> Self {
        Self {
            default_rounding,
            decimals,
            backend: WideBackend::Auto,
        }
    }

    /// Builder method: Set the default rounding mode
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.default_rounding = mode;
        self
    }

    /// Builder method: Set the decimal scale
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Builder method: Set the wide arithmetic backend
    pub fn with_backend(mut self, backend: WideBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(NumericError::InvalidScale);
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl Default for MultDivConfig {
    /// Nano-unit precision (9 decimals), banker's rounding
    fn default() -> Self {
        Self::new(RoundingMode::HalfEven, 9)
    }
}

impl MultDivConfig {
    /// Currency amounts
    /// - 2 decimals (cents)
    /// - Banker's rounding
    pub fn currency() -> Self {
        Self::new(RoundingMode::HalfEven, 2)
    }

    /// Micro-unit quantities
    /// - 6 decimals
    /// - Commercial rounding (ties away from zero)
    pub fn micro_units() -> Self {
        Self::new(RoundingMode::HalfUp, 6)
    }

    /// Strict configuration
    /// - Any rounding is an error
    pub fn exact(decimals: u8) -> Self {
        Self::new(RoundingMode::Unnecessary, decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = MultDivConfig::new(RoundingMode::Floor, 4);

        assert_eq!(config.default_rounding, RoundingMode::Floor);
        assert_eq!(config.decimals, 4);
        assert_eq!(config.backend, WideBackend::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MultDivConfig::currency()
            .with_backend(WideBackend::Limb)
            .with_decimals(3)
            .with_rounding(RoundingMode::Down);

        assert_eq!(config.backend, WideBackend::Limb);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.default_rounding, RoundingMode::Down);
    }

    #[test]
    fn test_validation() {
        assert!(MultDivConfig::exact(18).validate().is_ok());
        assert_eq!(
            MultDivConfig::exact(19).validate(),
            Err(NumericError::InvalidScale)
        );
    }

    #[test]
    fn test_preset_configs() {
        let default = MultDivConfig::default();
        assert_eq!(default.decimals, 9);
        assert_eq!(default.default_rounding, RoundingMode::HalfEven);

        assert_eq!(MultDivConfig::currency().decimals, 2);
        assert_eq!(
            MultDivConfig::micro_units().default_rounding,
            RoundingMode::HalfUp
        );
        assert_eq!(
            MultDivConfig::exact(6).default_rounding,
            RoundingMode::Unnecessary
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = MultDivConfig::micro_units().with_backend(WideBackend::Limb);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"HALF_UP\""));
        assert!(json.contains("\"limb\""));

        let back: MultDivConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
