// crates/uener-pix-core/src/runtime/validator.rs
// ============================================================================
// Module: BR Code Payload Validator
// Description: Structural re-parse and CRC re-check of arbitrary payloads.
// Purpose: Decide whether a payload's checksum matches its content.
// Dependencies: crate::core, serde, tracing
// ============================================================================

//! ## Overview
//! Validation re-parses the payload, requires the final field to be `63`
//! with length `04`, recomputes the CRC over everything before the checksum
//! value, and compares case-insensitively.
//!
//! [`validate_payload`] separates the two failure modes: a wrong checksum is
//! `Ok(false)` while undecodable input is [`MalformedPayload`].
//! [`check_payload`] folds both into a [`ValidationReport`] for callers that
//! treat malformed input as simply invalid.
//!
//! Security posture: payloads come from scanners and caches and are
//! untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use tracing::debug;

use crate::core::MalformedPayload;
use crate::core::crc16_ccitt;
use crate::core::decode_payload;
use crate::core::format_crc;
use crate::core::profile::CRC_LENGTH;
use crate::core::profile::tags;

// ============================================================================
// SECTION: Report
// ============================================================================

/// Recovered validation outcome.
///
/// # Invariants
/// - `structural_error` is `Some` only when both CRC members are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when the payload decodes and its checksum matches.
    pub valid: bool,
    /// Checksum recomputed from the payload content.
    pub expected_crc: Option<String>,
    /// Checksum carried by the payload.
    pub found_crc: Option<String>,
    /// Decoding failure, when the payload is not a structurally valid BR Code.
    pub structural_error: Option<String>,
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Returns whether the payload's CRC matches its content.
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the payload cannot be decoded or does not
/// end with a CRC field.
pub fn validate_payload(payload: &str) -> Result<bool, MalformedPayload> {
    let (expected, found) = crc_pair(payload)?;
    Ok(expected.eq_ignore_ascii_case(found))
}

/// Validates a payload, recovering structural errors into the report.
#[must_use]
pub fn check_payload(payload: &str) -> ValidationReport {
    let report = match crc_pair(payload) {
        Ok((expected, found)) => ValidationReport {
            valid: expected.eq_ignore_ascii_case(found),
            found_crc: Some(found.to_string()),
            expected_crc: Some(expected),
            structural_error: None,
        },
        Err(err) => ValidationReport {
            valid: false,
            expected_crc: None,
            found_crc: None,
            structural_error: Some(err.to_string()),
        },
    };
    debug!(
        valid = report.valid,
        structural = report.structural_error.is_some(),
        length = payload.len(),
        "checked pix payload"
    );
    report
}

/// Returns the recomputed checksum and the checksum carried by the payload.
fn crc_pair(payload: &str) -> Result<(String, &str), MalformedPayload> {
    let fields = decode_payload(payload)?;
    let Some(last) = fields.last() else {
        return Err(MalformedPayload::MissingCrc);
    };
    if last.tag != tags::CRC || last.length != CRC_LENGTH {
        return Err(MalformedPayload::MissingCrc);
    }
    let body = &payload[.. payload.len() - last.value.len()];
    Ok((format_crc(crc16_ccitt(body)), last.value))
}
