// crates/uener-pix-core/tests/validator.rs
// ============================================================================
// Module: Payload Validator Tests
// Description: CRC re-check and structural rejection of payloads.
// Purpose: Ensure tampered or malformed payloads are never reported valid.
// ============================================================================

//! Validator tests for uener-pix-core.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use uener_pix_core::MalformedPayload;
use uener_pix_core::check_payload;
use uener_pix_core::validate_payload;

const VALID: &str = "00020126440014BR.GOV.BCB.PIX0122uperesmarcon@gmail.com\
                     5204000053039865406520.005802BR5913UENER LINGUCO\
                     6012CAMPO MOURAO62150511UEN123456786304B3C8";

#[test]
fn reference_payload_is_valid() {
    assert_eq!(validate_payload(VALID), Ok(true));
}

#[test]
fn lowercase_crc_is_accepted() {
    let lower = VALID.replace("6304B3C8", "6304b3c8");
    assert_eq!(validate_payload(&lower), Ok(true));
}

#[test]
fn wrong_crc_is_invalid_not_malformed() {
    let tampered = VALID.replace("6304B3C8", "6304B3C9");
    assert_eq!(validate_payload(&tampered), Ok(false));
}

#[test]
fn tampered_amount_is_invalid() {
    let tampered = VALID.replace("520.00", "920.00");
    assert_eq!(validate_payload(&tampered), Ok(false));
}

#[test]
fn payload_without_crc_field_is_malformed() {
    let body = &VALID[.. VALID.len() - 8];
    assert_eq!(validate_payload(body), Err(MalformedPayload::MissingCrc));
    assert_eq!(validate_payload(""), Err(MalformedPayload::MissingCrc));
}

#[test]
fn crc_with_wrong_length_is_malformed() {
    let short = format!("{}6303B3C", &VALID[.. VALID.len() - 8]);
    assert_eq!(validate_payload(&short), Err(MalformedPayload::MissingCrc));
}

#[test]
fn truncated_payload_is_malformed() {
    assert!(validate_payload("00").is_err());
    assert!(validate_payload(&VALID[.. VALID.len() - 2]).is_err());
}

#[test]
fn check_payload_reports_both_checksums() {
    let tampered = VALID.replace("6304B3C8", "6304FFFF");
    let report = check_payload(&tampered);
    assert!(!report.valid);
    assert_eq!(report.expected_crc.as_deref(), Some("B3C8"));
    assert_eq!(report.found_crc.as_deref(), Some("FFFF"));
    assert!(report.structural_error.is_none());
}

#[test]
fn check_payload_recovers_structural_errors() {
    let report = check_payload("5905ABC");
    assert!(!report.valid);
    assert!(report.expected_crc.is_none());
    assert!(report.found_crc.is_none());
    assert!(report.structural_error.is_some());
}

#[test]
fn check_payload_serializes_report() {
    let report = check_payload(VALID);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["expected_crc"], "B3C8");
    assert_eq!(json["found_crc"], "B3C8");
    assert!(json["structural_error"].is_null());
}
