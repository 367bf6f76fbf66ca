// crates/uener-pix-core/src/core/amount.rs
// ============================================================================
// Module: Transaction Amount
// Description: Validated monetary amounts for the tag 54 field.
// Purpose: Reject invalid input and render amounts with exactly two decimals.
// Dependencies: bigdecimal, thiserror
// ============================================================================

//! ## Overview
//! Amounts are held as [`BigDecimal`] values fixed at scale 2 and rendered as
//! plain decimal text (`520.00`): dot separator, no grouping, no currency
//! symbol. Construction is the only validation point; an [`Amount`] in hand is
//! always non-negative, finite, and short enough for the wire field.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use bigdecimal::RoundingMode;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Number of decimal digits carried by every amount.
pub const AMOUNT_SCALE: i64 = 2;
/// Maximum rendered length of the transaction amount field.
pub const MAX_AMOUNT_TEXT_LENGTH: usize = 13;
/// Longest raw input accepted before parsing.
const MAX_AMOUNT_INPUT_LENGTH: usize = 64;
/// Smallest float whose integer part alone no longer fits the field.
const MAX_FLOAT_AMOUNT: f64 = 1e10;
/// Fraction digits kept when rendering a float before rounding to cents.
const FLOAT_FRACTION_DIGITS: usize = 30;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when an amount cannot be used in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// No amount was provided.
    #[error("amount is required")]
    Missing,
    /// Input is not a plain decimal number.
    #[error("amount is not a number: {0}")]
    NotNumeric(String),
    /// Input is below zero.
    #[error("amount must not be negative: {0}")]
    Negative(String),
    /// Input is NaN or infinite.
    #[error("amount must be finite")]
    NotFinite,
    /// Rendered amount exceeds the wire field limit.
    #[error("amount {0} exceeds the 13 character field limit")]
    TooLarge(String),
}

// ============================================================================
// SECTION: Amount
// ============================================================================

/// Non-negative monetary amount in BRL with two decimal digits.
///
/// # Invariants
/// - `value` has scale [`AMOUNT_SCALE`] and is never negative.
/// - `text` is the plain rendering of `value` and at most
///   [`MAX_AMOUNT_TEXT_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    /// Decimal value rounded to two places.
    value: BigDecimal,
    /// Wire rendering of `value`.
    text: String,
}

impl Amount {
    /// Creates an amount from a floating point number, rounding to cents.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError`] for NaN, infinities, negatives, and values too
    /// large for the field.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value.to_string()));
        }
        if value >= MAX_FLOAT_AMOUNT {
            return Err(AmountError::TooLarge(format!("{value:e}")));
        }
        // Fixed precision keeps the exact binary expansion for HalfUp rounding.
        parse_decimal(&format!("{value:.digits$}", digits = FLOAT_FRACTION_DIGITS))
    }

    /// Creates an amount from whole cents.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::TooLarge`] when the value does not fit the field.
    pub fn from_cents(cents: u64) -> Result<Self, AmountError> {
        let value = BigDecimal::new(cents.into(), AMOUNT_SCALE);
        finish(value)
    }

    /// Returns the wire rendering (for example `520.00`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.value
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Missing);
        }
        if trimmed.len() > MAX_AMOUNT_INPUT_LENGTH {
            return Err(AmountError::TooLarge(trimmed.to_string()));
        }
        parse_decimal(trimmed)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses optionally signed plain decimal text (no exponent, no grouping).
fn parse_decimal(text: &str) -> Result<Amount, AmountError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::NotNumeric(text.to_string()));
    }
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    let value = BigDecimal::from_str(&format!("{whole}.{fraction}"))
        .map_err(|_| AmountError::NotNumeric(text.to_string()))?;
    if negative && value != BigDecimal::from(0) {
        return Err(AmountError::Negative(text.to_string()));
    }
    finish(value)
}

/// Rounds to two places and enforces the rendered length limit.
fn finish(value: BigDecimal) -> Result<Amount, AmountError> {
    let value = value.with_scale_round(AMOUNT_SCALE, RoundingMode::HalfUp);
    let text = render_plain(&value);
    if text.len() > MAX_AMOUNT_TEXT_LENGTH {
        return Err(AmountError::TooLarge(text));
    }
    Ok(Amount {
        value,
        text,
    })
}

/// Renders a scale-2 decimal as plain text without exponent notation.
fn render_plain(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let scale = usize::try_from(scale).unwrap_or(0);
    let digits = digits.magnitude().to_string();
    let padded = format!("{digits:0>width$}", width = scale + 1);
    let split = padded.len() - scale;
    if scale == 0 {
        return padded;
    }
    format!("{}.{}", &padded[.. split], &padded[split ..])
}

// ============================================================================
// SECTION: Tests
// ============================================================================
