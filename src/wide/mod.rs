// ============================================================================
// Wide Arithmetic Module
// Double-width (128-bit) product and truncating division backends
//
// Backends:
// - NativeWide: Rust's native i128
// - LimbWide: portable two-limb u64 multiply and shift-subtract divide
// ============================================================================

mod detector;
mod limb;
mod native;
mod traits;

pub use detector::{create_native_backend, create_wide_backend, WideBackend};
pub use limb::{div_rem_128_by_64, widening_mul, LimbWide};
pub use native::NativeWide;
pub use traits::{WideArithmetic, WideQuotient};
