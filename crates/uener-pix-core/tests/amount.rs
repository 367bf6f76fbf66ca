// crates/uener-pix-core/tests/amount.rs
// ============================================================================
// Module: Amount Tests
// Description: Parsing, rounding, and rejection rules for transaction amounts.
// Purpose: Ensure only finite, non-negative, field-sized amounts reach the wire.
// ============================================================================

//! Amount tests for uener-pix-core.

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

use std::str::FromStr;

use bigdecimal::BigDecimal;
use uener_pix_core::Amount;
use uener_pix_core::AmountError;

fn text(input: &str) -> String {
    Amount::from_str(input).unwrap().as_str().to_string()
}

#[test]
fn renders_two_decimal_places() {
    assert_eq!(text("520"), "520.00");
    assert_eq!(text("10.5"), "10.50");
    assert_eq!(text(".5"), "0.50");
    assert_eq!(text("5."), "5.00");
    assert_eq!(text("0"), "0.00");
    assert_eq!(text("  7.25  "), "7.25");
    assert_eq!(text("+3"), "3.00");
    assert_eq!(text("007.10"), "7.10");
}

#[test]
fn rounds_half_up_to_cents() {
    assert_eq!(text("0.125"), "0.13");
    assert_eq!(text("0.124"), "0.12");
    assert_eq!(text("2.675"), "2.68");
    assert_eq!(text("9.995"), "10.00");
}

#[test]
fn negative_zero_is_zero() {
    assert_eq!(text("-0"), "0.00");
    assert_eq!(text("-0.00"), "0.00");
}

#[test]
fn rejects_invalid_text() {
    assert_eq!(Amount::from_str(""), Err(AmountError::Missing));
    assert_eq!(Amount::from_str("   "), Err(AmountError::Missing));
    assert!(matches!(Amount::from_str("abc"), Err(AmountError::NotNumeric(_))));
    assert!(matches!(Amount::from_str("1e3"), Err(AmountError::NotNumeric(_))));
    assert!(matches!(Amount::from_str("1,50"), Err(AmountError::NotNumeric(_))));
    assert!(matches!(Amount::from_str("."), Err(AmountError::NotNumeric(_))));
    assert!(matches!(Amount::from_str("NaN"), Err(AmountError::NotNumeric(_))));
    assert!(matches!(Amount::from_str("-1"), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::from_str("-0.01"), Err(AmountError::Negative(_))));
}

#[test]
fn enforces_thirteen_character_limit() {
    assert_eq!(text("9999999999.99"), "9999999999.99");
    assert!(matches!(Amount::from_str("99999999999.99"), Err(AmountError::TooLarge(_))));
    assert!(matches!(Amount::from_str("9999999999.995"), Err(AmountError::TooLarge(_))));
    let huge = "9".repeat(100);
    assert!(matches!(Amount::from_str(&huge), Err(AmountError::TooLarge(_))));
}

#[test]
fn from_f64_rounds_and_rejects() {
    assert_eq!(Amount::from_f64(520.0).unwrap().as_str(), "520.00");
    assert_eq!(Amount::from_f64(10.5).unwrap().as_str(), "10.50");
    assert_eq!(Amount::from_f64(1.005).unwrap().as_str(), "1.00");
    assert_eq!(Amount::from_f64(-0.0).unwrap().as_str(), "0.00");
    assert_eq!(Amount::from_f64(9_999_999_999.99).unwrap().as_str(), "9999999999.99");
    assert_eq!(Amount::from_f64(0.0).unwrap().as_str(), "0.00");
    assert_eq!(Amount::from_f64(f64::NAN), Err(AmountError::NotFinite));
    assert_eq!(Amount::from_f64(f64::INFINITY), Err(AmountError::NotFinite));
    assert_eq!(Amount::from_f64(f64::NEG_INFINITY), Err(AmountError::NotFinite));
    assert!(matches!(Amount::from_f64(-0.5), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::from_f64(1e300), Err(AmountError::TooLarge(_))));
    assert!(matches!(Amount::from_f64(1e12), Err(AmountError::TooLarge(_))));
}

#[test]
fn from_f64_rounds_exact_halves_up() {
    assert_eq!(Amount::from_f64(0.125).unwrap().as_str(), "0.13");
    assert_eq!(Amount::from_f64(10.125).unwrap().as_str(), "10.13");
    assert_eq!(Amount::from_f64(0.375).unwrap().as_str(), "0.38");
    for input in ["0.125", "10.125", "0.375", "520", "10.5"] {
        let parsed: f64 = input.parse().unwrap();
        assert_eq!(Amount::from_f64(parsed).unwrap(), Amount::from_str(input).unwrap());
    }
}

#[test]
fn from_f64_reports_oversized_values_compactly() {
    let Err(AmountError::TooLarge(text)) = Amount::from_f64(1e300) else {
        panic!("expected TooLarge");
    };
    assert_eq!(text, "1e300");
    assert!(matches!(Amount::from_f64(1e10), Err(AmountError::TooLarge(_))));
    assert!(matches!(Amount::from_f64(9_999_999_999.999), Err(AmountError::TooLarge(_))));
}

#[test]
fn from_cents_scales_by_one_hundred() {
    assert_eq!(Amount::from_cents(52_000).unwrap().as_str(), "520.00");
    assert_eq!(Amount::from_cents(5).unwrap().as_str(), "0.05");
    assert_eq!(Amount::from_cents(0).unwrap().as_str(), "0.00");
    assert!(matches!(Amount::from_cents(u64::MAX), Err(AmountError::TooLarge(_))));
}

#[test]
fn display_matches_wire_text() {
    let amount = Amount::from_str("42").unwrap();
    assert_eq!(amount.to_string(), "42.00");
    assert_eq!(amount.as_decimal(), &BigDecimal::from_str("42.00").unwrap());
    assert_eq!(amount.as_decimal().as_bigint_and_exponent().1, 2);
    assert_eq!(amount, Amount::from_cents(4_200).unwrap());
}
