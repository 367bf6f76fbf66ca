// crates/uener-pix-core/src/core/profile.rs
// ============================================================================
// Module: BR Code Profile Constants
// Description: Tags and fixed values mandated by the BCB PIX BR Code profile.
// Purpose: Keep every protocol literal in one place.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Constants from the EMV-Co Merchant-Presented QR standard as profiled
//! for PIX. None of these are configurable.

// ============================================================================
// SECTION: Fixed Values
// ============================================================================

/// Payload Format Indicator value.
pub const PAYLOAD_FORMAT_VERSION: &str = "01";
/// Globally unique identifier for PIX merchant account information.
///
/// # Invariants
/// - Must stay uppercase; wallets reject the lowercase form.
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";
/// Merchant Category Code (unspecified).
pub const MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for BRL.
pub const CURRENCY_BRL: &str = "986";
/// ISO 3166-1 alpha-2 country code for Brazil.
pub const COUNTRY_CODE_BR: &str = "BR";
/// CRC tag plus its fixed length, appended before the checksum is computed.
pub const CRC_FIELD_PREFIX: &str = "6304";
/// Number of characters in the CRC field value.
pub const CRC_LENGTH: usize = 4;

// ============================================================================
// SECTION: Tags
// ============================================================================

/// Top-level and nested tag identifiers.
pub mod tags {
    /// Payload Format Indicator.
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    /// Merchant Account Information template (PIX).
    pub const MERCHANT_ACCOUNT_INFORMATION: &str = "26";
    /// Merchant Category Code.
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    /// Transaction Currency.
    pub const TRANSACTION_CURRENCY: &str = "53";
    /// Transaction Amount.
    pub const TRANSACTION_AMOUNT: &str = "54";
    /// Country Code.
    pub const COUNTRY_CODE: &str = "58";
    /// Merchant Name.
    pub const MERCHANT_NAME: &str = "59";
    /// Merchant City.
    pub const MERCHANT_CITY: &str = "60";
    /// Additional Data Field template.
    pub const ADDITIONAL_DATA_FIELD: &str = "62";
    /// CRC checksum.
    pub const CRC: &str = "63";

    /// GUI sub-field inside the merchant account template.
    pub const GUI: &str = "00";
    /// PIX key sub-field inside the merchant account template.
    pub const PIX_KEY: &str = "01";
    /// Reference label (txid) sub-field inside the additional data template.
    pub const REFERENCE_LABEL: &str = "05";
}

/// Returns true when the tag carries a nested TLV template.
#[must_use]
pub fn is_template_tag(tag: &str) -> bool {
    tag == tags::MERCHANT_ACCOUNT_INFORMATION || tag == tags::ADDITIONAL_DATA_FIELD
}
