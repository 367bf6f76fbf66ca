// crates/uener-pix-core/src/lib.rs
// ============================================================================
// Module: Uener PIX Core Library
// Description: Public API surface for the PIX BR Code payload engine.
// Purpose: Expose wire primitives, payload types, and runtime helpers.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Uener PIX core builds, decodes, and validates EMV-Co Merchant-Presented
//! "BR Code" payloads as profiled by the Brazilian Central Bank for PIX
//! instant payments. The engine is synchronous and stateless: callers pass an
//! explicit [`MerchantConfig`], an [`Amount`], and a [`TransactionId`], and
//! receive a checksummed payload string.
//!
//! The crate has no dependency on HTTP, sessions, or storage; hosts wrap it in
//! whatever request model they use.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use runtime::BrCode;
pub use runtime::BuildError;
pub use runtime::FieldNode;
pub use runtime::PayloadBuilder;
pub use runtime::PixResponse;
pub use runtime::RawField;
pub use runtime::ValidationReport;
pub use runtime::check_payload;
pub use runtime::decode_tree;
pub use runtime::generate_response;
pub use runtime::validate_payload;
