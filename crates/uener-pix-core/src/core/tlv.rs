// crates/uener-pix-core/src/core/tlv.rs
// ============================================================================
// Module: BR Code TLV Codec
// Description: Tag-length-value encoding and decoding for EMV-Co payloads.
// Purpose: Provide the wire primitives shared by the builder and validator.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! BR Code fields are serialized as a two-digit tag, a two-digit zero-padded
//! decimal length, and the value itself. Lengths count characters, not bytes;
//! the profile restricts values to printable ASCII so the two coincide for
//! well-formed payloads.
//!
//! Decoding is fail-closed: any truncated header, non-decimal length, or value
//! overrun yields [`MalformedPayload`] instead of a partial result.
//!
//! ## Invariants
//! - Encoded values never exceed [`MAX_VALUE_LENGTH`] characters.
//! - Decoded fields borrow from the input; no state is kept between calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::iter::FusedIterator;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of characters a single field value may carry.
pub const MAX_VALUE_LENGTH: usize = 99;
/// Number of characters in a tag.
pub const TAG_LENGTH: usize = 2;
/// Number of characters in the length header.
pub const LENGTH_DIGITS: usize = 2;
/// Combined tag and length header size.
pub const HEADER_LENGTH: usize = TAG_LENGTH + LENGTH_DIGITS;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while encoding a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Value exceeds the two-digit length limit.
    #[error("field {tag} value has {length} characters (limit 99)")]
    ValueTooLong {
        /// Tag of the rejected field.
        tag: String,
        /// Character count of the rejected value.
        length: usize,
    },
    /// Tag is not exactly two ASCII digits.
    #[error("field tag must be two ascii digits, got '{0}'")]
    InvalidTag(String),
}

/// Errors raised while decoding a payload that is not a valid BR Code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPayload {
    /// Input ended inside a tag or length header.
    #[error("truncated field header at offset {offset}")]
    Truncated {
        /// Character offset of the incomplete header.
        offset: usize,
    },
    /// Length header is not a two-digit decimal number.
    #[error("invalid length '{length}' at offset {offset}")]
    InvalidLength {
        /// Character offset of the length header.
        offset: usize,
        /// Raw length header text.
        length: String,
    },
    /// Declared length runs past the end of the input.
    #[error("field {tag} declares {declared} characters but only {remaining} remain")]
    ValueOverrun {
        /// Tag of the overrunning field.
        tag: String,
        /// Declared value length.
        declared: usize,
        /// Characters actually remaining.
        remaining: usize,
    },
    /// Payload does not end with a `63`/`04` CRC field.
    #[error("payload does not end with a 6304 crc field")]
    MissingCrc,
    /// A mandatory field is absent.
    #[error("mandatory field {0} is missing")]
    MissingField(String),
}

// ============================================================================
// SECTION: Field
// ============================================================================

/// Decoded field borrowed from a payload string.
///
/// # Invariants
/// - `length == value.chars().count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Two-character tag.
    pub tag: &'a str,
    /// Declared value length in characters.
    pub length: usize,
    /// Field value.
    pub value: &'a str,
}

impl<'a> Field<'a> {
    /// Decodes the value of a template field as a nested payload.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedPayload`] when the value is not a TLV sequence.
    pub fn nested(&self) -> Result<Vec<Field<'a>>, MalformedPayload> {
        decode_payload(self.value)
    }

    /// Returns the number of characters this field occupies on the wire.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        HEADER_LENGTH + self.length
    }
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Encodes a single field as `tag ++ length ++ value`.
///
/// No character-set validation is applied; callers normalize values first.
///
/// # Errors
///
/// Returns [`EncodingError`] when the tag is malformed or the value exceeds
/// [`MAX_VALUE_LENGTH`] characters.
pub fn encode_field(tag: &str, value: &str) -> Result<String, EncodingError> {
    if !is_valid_tag(tag) {
        return Err(EncodingError::InvalidTag(tag.to_string()));
    }
    let length = value.chars().count();
    if length > MAX_VALUE_LENGTH {
        return Err(EncodingError::ValueTooLong {
            tag: tag.to_string(),
            length,
        });
    }
    Ok(format!("{tag}{length:02}{value}"))
}

/// Encodes a template field whose value is the concatenation of sub-fields.
///
/// # Errors
///
/// Returns [`EncodingError`] when any sub-field or the wrapped template is
/// invalid.
pub fn encode_template(tag: &str, children: &[(&str, &str)]) -> Result<String, EncodingError> {
    let mut inner = String::new();
    for (child_tag, child_value) in children {
        inner.push_str(&encode_field(child_tag, child_value)?);
    }
    encode_field(tag, &inner)
}

/// Returns true when the tag is exactly two ASCII digits.
fn is_valid_tag(tag: &str) -> bool {
    tag.len() == TAG_LENGTH && tag.bytes().all(|byte| byte.is_ascii_digit())
}

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Lazy iterator over the fields of a payload.
///
/// The iterator stops after yielding the first error.
#[derive(Debug, Clone)]
pub struct FieldIter<'a> {
    /// Unconsumed input.
    rest: &'a str,
    /// Character offset of `rest` within the original payload.
    offset: usize,
    /// Set once an error has been yielded.
    failed: bool,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = Result<Field<'a>, MalformedPayload>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        match next_field(self.rest, self.offset) {
            Ok((field, rest)) => {
                self.offset += field.encoded_len();
                self.rest = rest;
                Some(Ok(field))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for FieldIter<'_> {}

/// Returns a fresh lazy iterator over the fields of `payload`.
#[must_use]
pub const fn fields(payload: &str) -> FieldIter<'_> {
    FieldIter {
        rest: payload,
        offset: 0,
        failed: false,
    }
}

/// Decodes a flat TLV string into its ordered fields.
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the structure cannot be decoded.
pub fn decode_payload(payload: &str) -> Result<Vec<Field<'_>>, MalformedPayload> {
    fields(payload).collect()
}

/// Reads one field from the front of `input`.
fn next_field(input: &str, offset: usize) -> Result<(Field<'_>, &str), MalformedPayload> {
    let (tag, rest) = split_chars(input, TAG_LENGTH).ok_or(MalformedPayload::Truncated {
        offset,
    })?;
    let (length_text, rest) =
        split_chars(rest, LENGTH_DIGITS).ok_or(MalformedPayload::Truncated {
            offset,
        })?;
    let length = parse_length(length_text).ok_or_else(|| MalformedPayload::InvalidLength {
        offset: offset + TAG_LENGTH,
        length: length_text.to_string(),
    })?;
    let (value, rest) = split_chars(rest, length).ok_or_else(|| MalformedPayload::ValueOverrun {
        tag: tag.to_string(),
        declared: length,
        remaining: rest.chars().count(),
    })?;
    Ok((
        Field {
            tag,
            length,
            value,
        },
        rest,
    ))
}

/// Parses a two-digit decimal length header.
fn parse_length(text: &str) -> Option<usize> {
    if text.len() != LENGTH_DIGITS || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Splits `input` after `count` characters, or `None` when it is shorter.
fn split_chars(input: &str, count: usize) -> Option<(&str, &str)> {
    if count == 0 {
        return Some(("", input));
    }
    match input.char_indices().nth(count) {
        Some((index, _)) => Some(input.split_at(index)),
        None => (input.chars().count() == count).then_some((input, "")),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::parse_length;
    use super::split_chars;

    #[test]
    fn split_chars_counts_characters_not_bytes() {
        assert_eq!(split_chars("ÇAB", 1), Some(("Ç", "AB")));
        assert_eq!(split_chars("AB", 2), Some(("AB", "")));
        assert_eq!(split_chars("AB", 3), None);
        assert_eq!(split_chars("", 0), Some(("", "")));
    }

    #[test]
    fn parse_length_requires_two_digits() {
        assert_eq!(parse_length("07"), Some(7));
        assert_eq!(parse_length("99"), Some(99));
        assert_eq!(parse_length("7"), None);
        assert_eq!(parse_length("+7"), None);
        assert_eq!(parse_length("0A"), None);
    }
}
