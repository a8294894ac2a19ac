// ============================================================================
// Logging
// Optional tracing subscriber installation
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber at `level` as the global default.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
