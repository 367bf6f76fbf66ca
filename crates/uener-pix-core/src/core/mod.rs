// crates/uener-pix-core/src/core/mod.rs
// ============================================================================
// Module: Uener PIX Core Types
// Description: Wire primitives and value types for BR Code payloads.
// Purpose: Group TLV, CRC, amount, merchant, and transaction id definitions.
// Dependencies: bigdecimal, rand, serde, thiserror, time, unicode-normalization
// ============================================================================

//! ## Overview
//! Core types are pure values with validated constructors. Runtime helpers in
//! [`crate::runtime`] compose them into complete payloads.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod amount;
pub mod crc;
pub mod merchant;
pub mod profile;
pub mod tlv;
pub mod txid;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use amount::Amount;
pub use amount::AmountError;
pub use crc::crc16_ccitt;
pub use crc::crc16_ccitt_bytes;
pub use crc::format_crc;
pub use merchant::MerchantConfig;
pub use merchant::sanitize_text;
pub use tlv::EncodingError;
pub use tlv::Field;
pub use tlv::FieldIter;
pub use tlv::MalformedPayload;
pub use tlv::decode_payload;
pub use tlv::encode_field;
pub use tlv::encode_template;
pub use tlv::fields;
pub use txid::TransactionId;
pub use txid::TransactionIdError;
pub use txid::TxidGenerator;
pub use txid::TxidPrefix;
pub use txid::TxidStrategy;
