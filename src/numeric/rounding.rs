// ============================================================================
// Rounding Modes
// The eight rounding policies applied to an inexact scaled quotient
// ============================================================================

use super::errors::NumericError;
use rust_decimal::RoundingStrategy;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding policy for an inexact quotient.
///
/// The discriminants are the persisted ordinals and must stay in this order:
/// UP, DOWN, CEILING, FLOOR, HALF_UP, HALF_DOWN, HALF_EVEN, UNNECESSARY.
///
/// Directions are defined relative to the sign of the product `a * b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum RoundingMode {
    /// Away from zero
    Up = 0,
    /// Toward zero (truncation)
    Down = 1,
    /// Toward positive infinity
    Ceiling = 2,
    /// Toward negative infinity
    Floor = 3,
    /// Nearest neighbour, ties away from zero
    HalfUp = 4,
    /// Nearest neighbour, ties toward zero
    HalfDown = 5,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven = 6,
    /// Assert the quotient is exact; fail otherwise
    Unnecessary = 7,
}

impl RoundingMode {
    /// All modes in ordinal order.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// The persisted ordinal of this mode.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Decode an ordinal. Returns `None` for values outside 0..=7.
    #[inline]
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Canonical upper-case name, e.g. `HALF_EVEN`.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        }
    }

    /// Whether this mode rounds to the nearest neighbour.
    #[inline]
    pub const fn is_half_mode(self) -> bool {
        matches!(
            self,
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven
        )
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Equivalent `rust_decimal` strategy.
    ///
    /// `Unnecessary` has no counterpart and maps to `None`.
    pub fn to_decimal_strategy(self) -> Option<RoundingStrategy> {
        match self {
            RoundingMode::Up => Some(RoundingStrategy::AwayFromZero),
            RoundingMode::Down => Some(RoundingStrategy::ToZero),
            RoundingMode::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            RoundingMode::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            RoundingMode::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            RoundingMode::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            RoundingMode::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            RoundingMode::Unnecessary => None,
        }
    }

    /// Map a `rust_decimal` strategy back. Deprecated strategy aliases map to `None`.
    pub fn from_decimal_strategy(strategy: RoundingStrategy) -> Option<Self> {
        match strategy {
            RoundingStrategy::AwayFromZero => Some(RoundingMode::Up),
            RoundingStrategy::ToZero => Some(RoundingMode::Down),
            RoundingStrategy::ToPositiveInfinity => Some(RoundingMode::Ceiling),
            RoundingStrategy::ToNegativeInfinity => Some(RoundingMode::Floor),
            RoundingStrategy::MidpointAwayFromZero => Some(RoundingMode::HalfUp),
            RoundingStrategy::MidpointTowardZero => Some(RoundingMode::HalfDown),
            RoundingStrategy::MidpointNearestEven => Some(RoundingMode::HalfEven),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Parse a mode name.
    ///
    /// Case-insensitive; an optional `ROUND_` prefix is accepted,
    /// so `HALF_EVEN`, `half_even` and `ROUND_HALF_EVEN` are all equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROUND_").unwrap_or(&upper);
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == name)
            .ok_or(NumericError::InvalidInput)
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = NumericError;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(NumericError::InvalidInput)
    }
}

impl From<RoundingMode> for u8 {
    #[inline]
    fn from(mode: RoundingMode) -> Self {
        mode.ordinal()
    }
}
