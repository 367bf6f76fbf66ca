// crates/uener-pix-core/tests/inspect.rs
// ============================================================================
// Module: BR Code Inspection Tests
// Description: Named-field and tree views over decoded payloads.
// Purpose: Ensure inspection exposes every field without losing unknown tags.
// ============================================================================

//! Inspection tests for uener-pix-core.

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

use uener_pix_core::BrCode;
use uener_pix_core::MalformedPayload;
use uener_pix_core::decode_tree;

const VALID: &str = "00020126440014BR.GOV.BCB.PIX0122uperesmarcon@gmail.com\
                     5204000053039865406520.005802BR5913UENER LINGUCO\
                     6012CAMPO MOURAO62150511UEN123456786304B3C8";

#[test]
fn parse_exposes_named_fields() {
    let code = BrCode::parse(VALID).unwrap();
    assert_eq!(code.payload_format, "01");
    assert_eq!(code.gui.as_deref(), Some("BR.GOV.BCB.PIX"));
    assert_eq!(code.pix_key.as_deref(), Some("uperesmarcon@gmail.com"));
    assert_eq!(code.merchant_category_code, "0000");
    assert_eq!(code.currency, "986");
    assert_eq!(code.amount.as_deref(), Some("520.00"));
    assert_eq!(code.country, "BR");
    assert_eq!(code.merchant_name, "UENER LINGUCO");
    assert_eq!(code.merchant_city, "CAMPO MOURAO");
    assert_eq!(code.txid.as_deref(), Some("UEN12345678"));
    assert_eq!(code.crc, "B3C8");
    assert!(code.extra.is_empty());
}

#[test]
fn parse_does_not_check_crc() {
    let tampered = VALID.replace("6304B3C8", "63040000");
    assert_eq!(BrCode::parse(&tampered).unwrap().crc, "0000");
}

#[test]
fn parse_keeps_unknown_tags_in_order() {
    let with_extra = VALID.replace("5802BR", "5802BR8003XYZ");
    let code = BrCode::parse(&with_extra).unwrap();
    assert_eq!(code.extra.len(), 1);
    assert_eq!(code.extra[0].tag, "80");
    assert_eq!(code.extra[0].value, "XYZ");
}

#[test]
fn parse_allows_open_amount() {
    let open = VALID.replace("5406520.00", "");
    let code = BrCode::parse(&open).unwrap();
    assert!(code.amount.is_none());
}

#[test]
fn parse_reports_missing_mandatory_field() {
    let no_city = VALID.replace("6012CAMPO MOURAO", "");
    assert_eq!(BrCode::parse(&no_city), Err(MalformedPayload::MissingField("60".to_string())));
    let no_account = VALID.replace("26440014BR.GOV.BCB.PIX0122uperesmarcon@gmail.com", "");
    assert_eq!(
        BrCode::parse(&no_account),
        Err(MalformedPayload::MissingField("26".to_string()))
    );
}

#[test]
fn decode_tree_expands_templates() {
    let tree = decode_tree(VALID).unwrap();
    assert_eq!(tree.len(), 10);
    let account = &tree[1];
    assert_eq!(account.tag, "26");
    assert_eq!(account.length, 44);
    assert_eq!(account.children.len(), 2);
    assert_eq!(account.children[1].value, "uperesmarcon@gmail.com");
    let additional = &tree[8];
    assert_eq!(additional.children[0].tag, "05");
    assert!(tree[4].children.is_empty());
}

#[test]
fn decode_tree_serializes_without_empty_children() {
    let tree = decode_tree(VALID).unwrap();
    let json = serde_json::to_value(&tree).unwrap();
    assert!(json[0].get("children").is_none());
    assert_eq!(json[1]["children"][0]["value"], "BR.GOV.BCB.PIX");
}

#[test]
fn decode_tree_rejects_broken_template() {
    let broken = "2603000";
    assert!(decode_tree(broken).is_err());
}
