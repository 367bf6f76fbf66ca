// crates/uener-pix-core/src/runtime/builder.rs
// ============================================================================
// Module: BR Code Payload Builder
// Description: Assembles ordered, checksummed PIX payloads.
// Purpose: Turn a merchant identity, amount, and txid into a BR Code string.
// Dependencies: crate::core, thiserror, tracing
// ============================================================================

//! ## Overview
//! The builder emits the fixed field order wallets expect:
//! `00`, `26`, `52`, `53`, `54`, `58`, `59`, `60`, `62`, then `63`. The CRC
//! is computed over everything before it, including the literal `6304`.
//!
//! ## Invariants
//! - Any encoding failure aborts before the CRC is computed, so a returned
//!   payload always carries a correct checksum.
//! - The merchant account GUI is the uppercase constant [`PIX_GUI`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::core::Amount;
use crate::core::AmountError;
use crate::core::EncodingError;
use crate::core::MerchantConfig;
use crate::core::TransactionId;
use crate::core::crc16_ccitt;
use crate::core::encode_field;
use crate::core::encode_template;
use crate::core::format_crc;
use crate::core::merchant::is_printable_ascii;
use crate::core::profile::COUNTRY_CODE_BR;
use crate::core::profile::CRC_FIELD_PREFIX;
use crate::core::profile::CURRENCY_BRL;
use crate::core::profile::MERCHANT_CATEGORY_CODE;
use crate::core::profile::PAYLOAD_FORMAT_VERSION;
use crate::core::profile::PIX_GUI;
use crate::core::profile::tags;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a payload or its response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Amount could not be used.
    #[error("invalid amount: {0}")]
    Amount(#[from] AmountError),
    /// A field could not be encoded.
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
    /// Merchant identity is unusable.
    #[error("invalid merchant configuration: {0}")]
    InvalidMerchant(String),
    /// Response timestamp could not be rendered.
    #[error("timestamp formatting failed: {0}")]
    Timestamp(String),
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Payload builder bound to one merchant identity.
///
/// # Invariants
/// - `merchant_name` and `merchant_city` are already normalized and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadBuilder {
    /// Registered PIX key.
    pix_key: String,
    /// Normalized merchant name (field 59).
    merchant_name: String,
    /// Normalized merchant city (field 60).
    merchant_city: String,
}

impl PayloadBuilder {
    /// Creates a builder after normalizing and checking the merchant identity.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidMerchant`] when the PIX key is empty or
    /// not printable ASCII, or when the name or city normalize to nothing.
    pub fn new(merchant: &MerchantConfig) -> Result<Self, BuildError> {
        let pix_key = merchant.pix_key.trim();
        if pix_key.is_empty() {
            return Err(BuildError::InvalidMerchant("pix key must not be empty".to_string()));
        }
        if !pix_key.chars().all(is_printable_ascii) {
            return Err(BuildError::InvalidMerchant(
                "pix key must be printable ascii".to_string(),
            ));
        }
        let merchant_name = merchant.wire_name();
        if merchant_name.trim().is_empty() {
            return Err(BuildError::InvalidMerchant("merchant name must not be empty".to_string()));
        }
        let merchant_city = merchant.wire_city();
        if merchant_city.trim().is_empty() {
            return Err(BuildError::InvalidMerchant("merchant city must not be empty".to_string()));
        }
        Ok(Self {
            pix_key: pix_key.to_string(),
            merchant_name,
            merchant_city,
        })
    }

    /// Returns the normalized merchant name used in field 59.
    #[must_use]
    pub fn merchant_name(&self) -> &str {
        &self.merchant_name
    }

    /// Returns the normalized merchant city used in field 60.
    #[must_use]
    pub fn merchant_city(&self) -> &str {
        &self.merchant_city
    }

    /// Builds a complete payload.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Encoding`] when a value exceeds the field limit
    /// (for example a PIX key longer than 77 characters).
    pub fn build(&self, amount: &Amount, txid: &TransactionId) -> Result<String, BuildError> {
        let fields = [
            encode_field(tags::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_VERSION)?,
            encode_template(tags::MERCHANT_ACCOUNT_INFORMATION, &[
                (tags::GUI, PIX_GUI),
                (tags::PIX_KEY, self.pix_key.as_str()),
            ])?,
            encode_field(tags::MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY_CODE)?,
            encode_field(tags::TRANSACTION_CURRENCY, CURRENCY_BRL)?,
            encode_field(tags::TRANSACTION_AMOUNT, amount.as_str())?,
            encode_field(tags::COUNTRY_CODE, COUNTRY_CODE_BR)?,
            encode_field(tags::MERCHANT_NAME, &self.merchant_name)?,
            encode_field(tags::MERCHANT_CITY, &self.merchant_city)?,
            encode_template(tags::ADDITIONAL_DATA_FIELD, &[(
                tags::REFERENCE_LABEL,
                txid.as_str(),
            )])?,
        ];
        let mut payload = fields.concat();
        payload.push_str(CRC_FIELD_PREFIX);
        let crc = format_crc(crc16_ccitt(&payload));
        payload.push_str(&crc);
        debug!(
            txid = txid.as_str(),
            amount = amount.as_str(),
            length = payload.len(),
            crc = %crc,
            "built pix payload"
        );
        trace!(payload = %payload, "pix payload contents");
        Ok(payload)
    }

    /// Builds a payload from a raw floating point amount.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Amount`] for NaN, infinite, negative, or oversized
    /// amounts, and [`BuildError::Encoding`] as for [`Self::build`].
    pub fn build_from_value(
        &self,
        amount: f64,
        txid: &TransactionId,
    ) -> Result<String, BuildError> {
        let amount = Amount::from_f64(amount)?;
        self.build(&amount, txid)
    }
}
