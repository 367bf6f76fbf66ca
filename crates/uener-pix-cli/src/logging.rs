// crates/uener-pix-cli/src/logging.rs
// ============================================================================
// Module: CLI Logging
// Description: Tracing subscriber setup for the uener-pix binary.
// Purpose: Route diagnostics to stderr so stdout stays machine-readable.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! The filter comes from `RUST_LOG` and defaults to `warn`. Core events carry
//! txid, payload length, and CRC at `debug`; payload contents only appear at
//! `trace`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io;

use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: Initialization
// ============================================================================

/// Builds the log filter from optional directives, falling back to
/// [`DEFAULT_LOG_FILTER`] when they are absent or unparsable.
#[must_use]
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global stderr subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let directives = std::env::var(LOG_FILTER_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
