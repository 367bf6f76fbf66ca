// crates/uener-pix-core/src/runtime/inspect.rs
// ============================================================================
// Module: BR Code Inspection
// Description: Named-field and tree views over decoded payloads.
// Purpose: Let operators see what a scanned or cached payload actually carries.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! [`BrCode::parse`] maps a decoded payload onto named members and keeps any
//! unrecognized top-level tags in wire order. [`decode_tree`] produces an
//! owned field tree with template fields (`26`, `62`) expanded.
//!
//! Neither view checks the CRC; pair them with
//! [`check_payload`](crate::runtime::check_payload) when validity matters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::Field;
use crate::core::MalformedPayload;
use crate::core::decode_payload;
use crate::core::profile::is_template_tag;
use crate::core::profile::tags;

// ============================================================================
// SECTION: Field Tree
// ============================================================================

/// Owned decoded field with expanded template children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldNode {
    /// Two-character tag.
    pub tag: String,
    /// Declared value length.
    pub length: usize,
    /// Raw field value.
    pub value: String,
    /// Nested fields for template tags; empty otherwise.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldNode>,
}

/// Decodes a payload into an owned tree, expanding template fields.
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the payload or a template value cannot be
/// decoded.
pub fn decode_tree(payload: &str) -> Result<Vec<FieldNode>, MalformedPayload> {
    decode_payload(payload)?.iter().map(to_node).collect()
}

/// Converts a borrowed field into an owned node.
fn to_node(field: &Field<'_>) -> Result<FieldNode, MalformedPayload> {
    let children = if is_template_tag(field.tag) {
        field.nested()?.iter().map(to_node).collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };
    Ok(FieldNode {
        tag: field.tag.to_string(),
        length: field.length,
        value: field.value.to_string(),
        children,
    })
}

// ============================================================================
// SECTION: Named View
// ============================================================================

/// Unrecognized top-level field preserved by [`BrCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawField {
    /// Two-character tag.
    pub tag: String,
    /// Raw field value.
    pub value: String,
}

/// Named view of a decoded PIX BR Code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrCode {
    /// Payload Format Indicator (field 00).
    pub payload_format: String,
    /// Merchant account GUI (field 26, sub-field 00).
    pub gui: Option<String>,
    /// PIX key (field 26, sub-field 01).
    pub pix_key: Option<String>,
    /// Merchant Category Code (field 52).
    pub merchant_category_code: String,
    /// Transaction currency (field 53).
    pub currency: String,
    /// Transaction amount (field 54), absent for open-amount codes.
    pub amount: Option<String>,
    /// Country code (field 58).
    pub country: String,
    /// Merchant name (field 59).
    pub merchant_name: String,
    /// Merchant city (field 60).
    pub merchant_city: String,
    /// Reference label (field 62, sub-field 05).
    pub txid: Option<String>,
    /// CRC value (field 63).
    pub crc: String,
    /// Unrecognized top-level fields in wire order.
    pub extra: Vec<RawField>,
}

impl BrCode {
    /// Decodes a payload into its named fields.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayload`] when decoding fails or a mandatory field
    /// is missing.
    pub fn parse(payload: &str) -> Result<Self, MalformedPayload> {
        let mut slots = Slots::default();
        for field in decode_payload(payload)? {
            match field.tag {
                tags::PAYLOAD_FORMAT_INDICATOR => slots.payload_format = Some(field.value),
                tags::MERCHANT_ACCOUNT_INFORMATION => {
                    slots.merchant_account = Some(field.value);
                    for child in field.nested()? {
                        match child.tag {
                            tags::GUI => slots.gui = Some(child.value),
                            tags::PIX_KEY => slots.pix_key = Some(child.value),
                            _ => {}
                        }
                    }
                }
                tags::MERCHANT_CATEGORY_CODE => slots.mcc = Some(field.value),
                tags::TRANSACTION_CURRENCY => slots.currency = Some(field.value),
                tags::TRANSACTION_AMOUNT => slots.amount = Some(field.value),
                tags::COUNTRY_CODE => slots.country = Some(field.value),
                tags::MERCHANT_NAME => slots.name = Some(field.value),
                tags::MERCHANT_CITY => slots.city = Some(field.value),
                tags::ADDITIONAL_DATA_FIELD => {
                    for child in field.nested()? {
                        if child.tag == tags::REFERENCE_LABEL {
                            slots.txid = Some(child.value);
                        }
                    }
                }
                tags::CRC => slots.crc = Some(field.value),
                _ => slots.extra.push(RawField {
                    tag: field.tag.to_string(),
                    value: field.value.to_string(),
                }),
            }
        }
        slots.finish()
    }
}

/// Borrowed field slots collected during a single decoding pass.
#[derive(Default)]
struct Slots<'a> {
    /// Field 00.
    payload_format: Option<&'a str>,
    /// Field 26 raw value.
    merchant_account: Option<&'a str>,
    /// Field 26 sub-field 00.
    gui: Option<&'a str>,
    /// Field 26 sub-field 01.
    pix_key: Option<&'a str>,
    /// Field 52.
    mcc: Option<&'a str>,
    /// Field 53.
    currency: Option<&'a str>,
    /// Field 54.
    amount: Option<&'a str>,
    /// Field 58.
    country: Option<&'a str>,
    /// Field 59.
    name: Option<&'a str>,
    /// Field 60.
    city: Option<&'a str>,
    /// Field 62 sub-field 05.
    txid: Option<&'a str>,
    /// Field 63.
    crc: Option<&'a str>,
    /// Unrecognized fields.
    extra: Vec<RawField>,
}

impl Slots<'_> {
    /// Checks mandatory fields and converts to an owned [`BrCode`].
    fn finish(self) -> Result<BrCode, MalformedPayload> {
        if self.merchant_account.is_none() {
            return Err(missing(tags::MERCHANT_ACCOUNT_INFORMATION));
        }
        Ok(BrCode {
            payload_format: required(self.payload_format, tags::PAYLOAD_FORMAT_INDICATOR)?,
            gui: self.gui.map(str::to_string),
            pix_key: self.pix_key.map(str::to_string),
            merchant_category_code: required(self.mcc, tags::MERCHANT_CATEGORY_CODE)?,
            currency: required(self.currency, tags::TRANSACTION_CURRENCY)?,
            amount: self.amount.map(str::to_string),
            country: required(self.country, tags::COUNTRY_CODE)?,
            merchant_name: required(self.name, tags::MERCHANT_NAME)?,
            merchant_city: required(self.city, tags::MERCHANT_CITY)?,
            txid: self.txid.map(str::to_string),
            crc: required(self.crc, tags::CRC)?,
            extra: self.extra,
        })
    }
}

/// Returns an owned copy of a mandatory slot.
fn required(slot: Option<&str>, tag: &str) -> Result<String, MalformedPayload> {
    slot.map(str::to_string).ok_or_else(|| missing(tag))
}

/// Builds a missing-field error for `tag`.
fn missing(tag: &str) -> MalformedPayload {
    MalformedPayload::MissingField(tag.to_string())
}
