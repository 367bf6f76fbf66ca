// crates/uener-pix-core/tests/response.rs
// ============================================================================
// Module: Response Assembler Tests
// Description: JSON response shape for generated payloads.
// Purpose: Pin the keys and values clients consume.
// ============================================================================

//! Response tests for uener-pix-core.

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

use time::OffsetDateTime;
use time::UtcOffset;
use uener_pix_core::Amount;
use uener_pix_core::MerchantConfig;
use uener_pix_core::PayloadBuilder;
use uener_pix_core::PixResponse;
use uener_pix_core::TransactionId;
use uener_pix_core::generate_response;

fn generated_at() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000)
        .unwrap()
        .replace_nanosecond(123_456_789)
        .unwrap()
}

fn response() -> PixResponse {
    let builder = PayloadBuilder::new(&MerchantConfig::default()).unwrap();
    let amount: Amount = "520".parse().unwrap();
    let txid = TransactionId::parse("UEN12345678").unwrap();
    generate_response(&builder, &amount, &txid, generated_at()).unwrap()
}

#[test]
fn response_carries_payload_metadata() {
    let response = response();
    assert!(response.payload.ends_with("6304B3C8"));
    assert_eq!(response.crc, "B3C8");
    assert_eq!(response.tamanho, 145);
    assert_eq!(response.txid, "UEN12345678");
    assert!(response.validado);
}

#[test]
fn timestamp_is_utc_with_milliseconds() {
    assert_eq!(response().timestamp, "2023-11-14T22:13:20.123Z");
}

fn timestamp_at(nanosecond: u32) -> String {
    let builder = PayloadBuilder::new(&MerchantConfig::default()).unwrap();
    let amount: Amount = "1".parse().unwrap();
    let txid = TransactionId::parse("X1").unwrap();
    let at = OffsetDateTime::from_unix_timestamp(1_700_000_000)
        .unwrap()
        .replace_nanosecond(nanosecond)
        .unwrap();
    generate_response(&builder, &amount, &txid, at).unwrap().timestamp
}

#[test]
fn timestamp_keeps_three_fraction_digits() {
    assert_eq!(timestamp_at(0), "2023-11-14T22:13:20.000Z");
    assert_eq!(timestamp_at(100_000_000), "2023-11-14T22:13:20.100Z");
    assert_eq!(timestamp_at(120_000_000), "2023-11-14T22:13:20.120Z");
    assert_eq!(timestamp_at(999_999_999), "2023-11-14T22:13:20.999Z");
    assert_eq!(timestamp_at(0).len(), timestamp_at(123_000_000).len());
}

#[test]
fn timestamp_is_converted_to_utc() {
    let builder = PayloadBuilder::new(&MerchantConfig::default()).unwrap();
    let amount: Amount = "1".parse().unwrap();
    let txid = TransactionId::parse("X1").unwrap();
    let offset = UtcOffset::from_hms(-3, 0, 0).unwrap();
    let local = generated_at().to_offset(offset);
    let response = generate_response(&builder, &amount, &txid, local).unwrap();
    assert_eq!(response.timestamp, "2023-11-14T22:13:20.123Z");
}

#[test]
fn serializes_with_client_keys() {
    let json = serde_json::to_value(response()).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["crc", "payload", "tamanho", "timestamp", "txid", "validado"]);
    assert_eq!(json["tamanho"], 145);
    assert_eq!(json["validado"], true);
}

#[test]
fn assemble_flags_invalid_payload() {
    let txid = TransactionId::parse("X1").unwrap();
    let response = PixResponse::assemble("0002016304ZZZZ".to_string(), &txid, generated_at())
        .unwrap();
    assert_eq!(response.crc, "ZZZZ");
    assert_eq!(response.tamanho, 14);
    assert!(!response.validado);
}
