// crates/uener-pix-core/src/core/txid.rs
// ============================================================================
// Module: Transaction Identifiers
// Description: Reference labels carried in the additional data field.
// Purpose: Validate caller txids and generate default ones.
// Dependencies: rand, serde, thiserror, time
// ============================================================================

//! ## Overview
//! A [`TransactionId`] is the reference label placed under tag `62`/`05`.
//! Caller-supplied ids are validated against the profile limits. Generated
//! ids follow a [`TxidStrategy`]:
//! - `Timestamp`: prefix plus the last 8 digits of the Unix epoch
//!   millisecond clock. Two calls within the same millisecond collide.
//! - `Random`: prefix plus 12 random uppercase alphanumerics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default prefix for generated transaction ids.
pub const DEFAULT_TXID_PREFIX: &str = "UEN";
/// Maximum reference label length allowed by the profile.
pub const MAX_TXID_LENGTH: usize = 25;
/// Maximum prefix length for generated ids.
pub const MAX_TXID_PREFIX_LENGTH: usize = 8;
/// Reference label used by static codes without a txid.
pub const STATIC_TXID: &str = "***";
/// Number of trailing timestamp digits kept by the timestamp strategy.
pub const TIMESTAMP_SUFFIX_DIGITS: u32 = 8;
/// Number of random characters appended by the random strategy.
pub const RANDOM_SUFFIX_LENGTH: usize = 12;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised for invalid transaction ids or prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionIdError {
    /// Transaction id is empty.
    #[error("transaction id must not be empty")]
    Empty,
    /// Transaction id exceeds the profile limit.
    #[error("transaction id has {0} characters (limit 25)")]
    TooLong(usize),
    /// Transaction id contains characters other than ASCII letters and digits.
    #[error("transaction id must contain only ascii letters and digits")]
    InvalidCharacter,
    /// Generator prefix is empty, too long, or not alphanumeric.
    #[error("transaction id prefix must be 1 to 8 ascii letters or digits")]
    InvalidPrefix,
}

// ============================================================================
// SECTION: Transaction Id
// ============================================================================

/// Validated reference label for the additional data field.
///
/// # Invariants
/// - 1 to [`MAX_TXID_LENGTH`] ASCII alphanumerics, or exactly [`STATIC_TXID`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Validates a caller-supplied transaction id.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionIdError`] when the id violates the profile limits.
    pub fn parse(value: impl Into<String>) -> Result<Self, TransactionIdError> {
        let value = value.into();
        if value == STATIC_TXID {
            return Ok(Self(value));
        }
        if value.is_empty() {
            return Err(TransactionIdError::Empty);
        }
        if !value.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(TransactionIdError::InvalidCharacter);
        }
        if value.len() > MAX_TXID_LENGTH {
            return Err(TransactionIdError::TooLong(value.len()));
        }
        Ok(Self(value))
    }

    /// Builds a timestamp-strategy id from an explicit Unix millisecond value.
    ///
    /// Only the last 8 decimal digits of `unix_millis` are kept.
    #[must_use]
    pub fn from_unix_millis(prefix: &TxidPrefix, unix_millis: i128) -> Self {
        let suffix = unix_millis.rem_euclid(10_i128.pow(TIMESTAMP_SUFFIX_DIGITS));
        Self(format!("{}{suffix:08}", prefix.as_str()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Generation
// ============================================================================

/// Strategy used when the caller does not supply a transaction id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxidStrategy {
    /// Prefix plus the last 8 digits of the millisecond clock.
    #[default]
    Timestamp,
    /// Prefix plus random uppercase alphanumerics.
    Random,
}

/// Validated prefix for generated transaction ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxidPrefix(String);

impl TxidPrefix {
    /// Validates a generator prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionIdError::InvalidPrefix`] unless the prefix is 1 to
    /// [`MAX_TXID_PREFIX_LENGTH`] ASCII alphanumerics.
    pub fn new(prefix: impl Into<String>) -> Result<Self, TransactionIdError> {
        let prefix = prefix.into();
        let valid = !prefix.is_empty()
            && prefix.len() <= MAX_TXID_PREFIX_LENGTH
            && prefix.bytes().all(|byte| byte.is_ascii_alphanumeric());
        if valid { Ok(Self(prefix)) } else { Err(TransactionIdError::InvalidPrefix) }
    }

    /// Returns the prefix as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TxidPrefix {
    fn default() -> Self {
        Self(DEFAULT_TXID_PREFIX.to_string())
    }
}

/// Generates transaction ids for callers that omit one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxidGenerator {
    /// Generation strategy.
    strategy: TxidStrategy,
    /// Prefix prepended to every generated id.
    prefix: TxidPrefix,
}

impl TxidGenerator {
    /// Creates a generator with an explicit strategy and prefix.
    #[must_use]
    pub const fn new(strategy: TxidStrategy, prefix: TxidPrefix) -> Self {
        Self {
            strategy,
            prefix,
        }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> TxidStrategy {
        self.strategy
    }

    /// Generates an id using the wall clock or the thread-local RNG.
    #[must_use]
    pub fn generate(&self) -> TransactionId {
        self.generate_at(OffsetDateTime::now_utc())
    }

    /// Generates an id using an explicit clock value for the timestamp strategy.
    #[must_use]
    pub fn generate_at(&self, now: OffsetDateTime) -> TransactionId {
        match self.strategy {
            TxidStrategy::Timestamp => {
                TransactionId::from_unix_millis(&self.prefix, now.unix_timestamp_nanos() / 1_000_000)
            }
            TxidStrategy::Random => {
                let mut rng = rand::thread_rng();
                let suffix: String = (0 .. RANDOM_SUFFIX_LENGTH)
                    .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_uppercase())
                    .collect();
                TransactionId(format!("{}{suffix}", self.prefix.as_str()))
            }
        }
    }
}
