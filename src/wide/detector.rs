// ============================================================================
// Backend Detection and Wide Arithmetic Factory
// Target detection and backend selection for the double-width step
// ============================================================================

use super::limb::LimbWide;
use super::native::NativeWide;
use super::traits::WideArithmetic;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which double-width backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WideBackend {
    /// Pick the best backend for the compilation target
    #[default]
    Auto,
    /// Native `i128` arithmetic
    Native,
    /// Portable two-limb `u64` arithmetic
    Limb,
}

impl WideBackend {
    /// Resolve `Auto` for the current target.
    ///
    /// 64-bit targets have a hardware widening multiply and use `Native`;
    /// narrower targets fall back to the limb routines.
    pub fn resolve(self) -> Self {
        match self {
            WideBackend::Auto => {
                #[cfg(target_pointer_width = "64")]
                {
                    WideBackend::Native
                }
                #[cfg(not(target_pointer_width = "64"))]
                {
                    WideBackend::Limb
                }
            },
            other => other,
        }
    }
}

impl std::fmt::Display for WideBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WideBackend::Auto => write!(f, "auto"),
            WideBackend::Native => write!(f, "native i128"),
            WideBackend::Limb => write!(f, "two-limb u64"),
        }
    }
}

/// Create the backend selected by `kind`.
///
/// # Example
/// ```
/// use scaled_multdiv::wide::{create_wide_backend, WideArithmetic, WideBackend};
///
/// let backend = create_wide_backend(WideBackend::Limb);
/// assert_eq!(backend.name(), "TwoLimb");
/// assert_eq!(backend.div_rem_product(7, 3, 2).quotient, 10);
/// ```
pub fn create_wide_backend(kind: WideBackend) -> Arc<dyn WideArithmetic> {
    match kind.resolve() {
        WideBackend::Limb => Arc::new(LimbWide::new()),
        _ => Arc::new(NativeWide::new()),
    }
}

/// Create the native backend (for testing or comparison).
pub fn create_native_backend() -> Arc<dyn WideArithmetic> {
    Arc::new(NativeWide::new())
}
