// crates/uener-pix-core/src/runtime/response.rs
// ============================================================================
// Module: PIX Response Assembler
// Description: Externally observed response shape for generated payloads.
// Purpose: Package a payload with its CRC, length, txid, and self-check.
// Dependencies: crate::{core, runtime}, serde, time
// ============================================================================

//! ## Overview
//! [`PixResponse`] serializes with the JSON keys consumed by the storefront:
//! `payload`, `crc`, `tamanho`, `txid`, `validado`, `timestamp`. Assembly is
//! pure; the caller supplies the generation time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use time::OffsetDateTime;
use time::UtcOffset;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::core::Amount;
use crate::core::TransactionId;
use crate::core::profile::CRC_LENGTH;
use crate::runtime::builder::BuildError;
use crate::runtime::builder::PayloadBuilder;
use crate::runtime::validator::validate_payload;

// ============================================================================
// SECTION: Response
// ============================================================================

/// Generated payload plus the metadata returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixResponse {
    /// Complete BR Code payload.
    pub payload: String,
    /// Trailing four CRC characters.
    pub crc: String,
    /// Payload length in characters.
    pub tamanho: usize,
    /// Reference label embedded in field 62.
    pub txid: String,
    /// Result of re-validating the payload.
    pub validado: bool,
    /// UTC generation time, RFC 3339 with millisecond precision.
    pub timestamp: String,
}

impl PixResponse {
    /// Assembles a response for an already built payload.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Timestamp`] when `generated_at` cannot be
    /// rendered as RFC 3339.
    pub fn assemble(
        payload: String,
        txid: &TransactionId,
        generated_at: OffsetDateTime,
    ) -> Result<Self, BuildError> {
        let timestamp = format_timestamp(generated_at)?;
        let tamanho = payload.chars().count();
        let crc_start =
            payload.char_indices().rev().nth(CRC_LENGTH - 1).map_or(0, |(index, _)| index);
        let crc = payload[crc_start ..].to_string();
        let validado = validate_payload(&payload).unwrap_or(false);
        Ok(Self {
            payload,
            crc,
            tamanho,
            txid: txid.as_str().to_string(),
            validado,
            timestamp,
        })
    }
}

/// Builds a payload and assembles its response in one call.
///
/// # Errors
///
/// Returns [`BuildError`] when building or timestamp rendering fails.
pub fn generate_response(
    builder: &PayloadBuilder,
    amount: &Amount,
    txid: &TransactionId,
    generated_at: OffsetDateTime,
) -> Result<PixResponse, BuildError> {
    let payload = builder.build(amount, txid)?;
    PixResponse::assemble(payload, txid, generated_at)
}

/// RFC 3339 UTC layout with exactly three fractional digits.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Renders a UTC RFC 3339 timestamp truncated to milliseconds.
fn format_timestamp(value: OffsetDateTime) -> Result<String, BuildError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .map_err(|err| BuildError::Timestamp(err.to_string()))
}
