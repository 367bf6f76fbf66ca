// crates/uener-pix-core/src/core/merchant.rs
// ============================================================================
// Module: Merchant Identity
// Description: Merchant key, name, and city passed explicitly to the builder.
// Purpose: Replace ambient process configuration with an explicit value.
// Dependencies: serde, unicode-normalization
// ============================================================================

//! ## Overview
//! [`MerchantConfig`] carries the static PIX key and merchant identity. Name
//! and city are normalized at the builder boundary: diacritics are removed
//! through NFD decomposition, anything left outside printable ASCII is
//! dropped, and the result is truncated to the profile limits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default PIX key registered for the store.
pub const DEFAULT_PIX_KEY: &str = "uperesmarcon@gmail.com";
/// Default merchant display name.
pub const DEFAULT_MERCHANT_NAME: &str = "UENER LINGUÇO";
/// Default merchant city.
pub const DEFAULT_MERCHANT_CITY: &str = "CAMPO MOURAO";
/// Maximum merchant name length on the wire.
pub const MAX_MERCHANT_NAME_LENGTH: usize = 25;
/// Maximum merchant city length on the wire.
pub const MAX_MERCHANT_CITY_LENGTH: usize = 15;

// ============================================================================
// SECTION: Merchant Config
// ============================================================================

/// Merchant identity embedded in every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Registered PIX key (email, phone, CPF/CNPJ, or random key).
    pub pix_key: String,
    /// Merchant display name (normalized before encoding).
    pub merchant_name: String,
    /// Merchant city (normalized before encoding).
    pub merchant_city: String,
}

impl MerchantConfig {
    /// Creates a merchant config from explicit values.
    #[must_use]
    pub fn new(
        pix_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
        }
    }

    /// Returns the merchant name as it appears in field 59.
    #[must_use]
    pub fn wire_name(&self) -> String {
        sanitize_text(&self.merchant_name, MAX_MERCHANT_NAME_LENGTH)
    }

    /// Returns the merchant city as it appears in field 60.
    #[must_use]
    pub fn wire_city(&self) -> String {
        sanitize_text(&self.merchant_city, MAX_MERCHANT_CITY_LENGTH)
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PIX_KEY, DEFAULT_MERCHANT_NAME, DEFAULT_MERCHANT_CITY)
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Strips diacritics and non-printable-ASCII characters, then truncates.
///
/// `"UENER LINGUÇO"` becomes `"UENER LINGUCO"`.
#[must_use]
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    input
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| is_printable_ascii(*ch))
        .take(max_chars)
        .collect()
}

/// Returns true for characters in the printable ASCII range.
pub const fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, ' ' ..= '~')
}
