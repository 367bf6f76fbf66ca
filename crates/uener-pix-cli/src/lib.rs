// crates/uener-pix-cli/src/lib.rs
// ============================================================================
// Module: Uener PIX CLI Library
// Description: Shared helpers for the uener-pix command-line interface.
// Purpose: Provide reusable components (i18n, logging) for the binary and tests.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! This library houses the localized message catalog and the tracing
//! subscriber setup. The binary entry point (`src/main.rs`) imports these
//! helpers so all user-facing output stays consistent.
//!
//! Security posture: CLI inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Tracing subscriber initialization.
pub mod logging;

#[cfg(test)]
mod tests;
