// crates/uener-pix-core/src/runtime/mod.rs
// ============================================================================
// Module: Uener PIX Runtime
// Description: Payload assembly, validation, inspection, and response shaping.
// Purpose: Compose core wire primitives into complete BR Code operations.
// Dependencies: crate::core, serde, thiserror, time, tracing
// ============================================================================

//! ## Overview
//! Runtime helpers are stateless: every call builds or re-parses a payload
//! from scratch and may run concurrently without coordination.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod builder;
pub mod inspect;
pub mod response;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use builder::BuildError;
pub use builder::PayloadBuilder;
pub use inspect::BrCode;
pub use inspect::FieldNode;
pub use inspect::RawField;
pub use inspect::decode_tree;
pub use response::PixResponse;
pub use response::generate_response;
pub use validator::ValidationReport;
pub use validator::check_payload;
pub use validator::validate_payload;
