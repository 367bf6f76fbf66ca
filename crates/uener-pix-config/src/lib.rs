// crates/uener-pix-config/src/lib.rs
// ============================================================================
// Module: Uener PIX Config Library
// Description: Merchant configuration model and loader.
// Purpose: Single source of truth for uener-pix.toml semantics.
// Dependencies: uener-pix-core, serde, toml, tracing
// ============================================================================

//! ## Overview
//! `uener-pix-config` loads the merchant identity and transaction id policy
//! from `uener-pix.toml`, applies environment overrides, and validates the
//! result before it reaches the payload builder.
//!
//! Security posture: config inputs are untrusted and validation fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
