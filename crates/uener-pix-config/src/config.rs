// crates/uener-pix-config/src/config.rs
// ============================================================================
// Module: Uener PIX Configuration
// Description: Configuration loading and validation for the payload engine.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: uener-pix-core, serde, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits,
//! then environment overrides are applied and the merged result is validated.
//!
//! Resolution order for the file: explicit path, then `UENER_PIX_CONFIG`,
//! then `uener-pix.toml` in the working directory. Only the last may be
//! absent; the built-in merchant defaults are used in that case.
//!
//! Environment overrides: `PIX_KEY`, `PIX_MERCHANT_NAME`, `PIX_MERCHANT_CITY`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uener_pix_core::MerchantConfig;
use uener_pix_core::TxidGenerator;
use uener_pix_core::TxidPrefix;
use uener_pix_core::TxidStrategy;
use uener_pix_core::merchant::DEFAULT_MERCHANT_CITY;
use uener_pix_core::merchant::DEFAULT_MERCHANT_NAME;
use uener_pix_core::merchant::DEFAULT_PIX_KEY;
use uener_pix_core::merchant::is_printable_ascii;
use uener_pix_core::txid::DEFAULT_TXID_PREFIX;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "uener-pix.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "UENER_PIX_CONFIG";
/// Environment variable overriding `merchant.pix_key`.
pub const PIX_KEY_ENV_VAR: &str = "PIX_KEY";
/// Environment variable overriding `merchant.name`.
pub const MERCHANT_NAME_ENV_VAR: &str = "PIX_MERCHANT_NAME";
/// Environment variable overriding `merchant.city`.
pub const MERCHANT_CITY_ENV_VAR: &str = "PIX_MERCHANT_CITY";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Longest PIX key that still fits the merchant account template.
pub const MAX_PIX_KEY_LENGTH: usize = 77;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Top-level `uener-pix.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixConfig {
    /// Merchant identity.
    #[serde(default)]
    pub merchant: MerchantSection,
    /// Transaction id generation policy.
    #[serde(default)]
    pub txid: TxidSection,
    /// File the configuration was read from (not serialized).
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// `[merchant]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MerchantSection {
    /// Registered PIX key.
    #[serde(default = "default_pix_key")]
    pub pix_key: String,
    /// Merchant display name before normalization.
    #[serde(default = "default_merchant_name")]
    pub name: String,
    /// Merchant city before normalization.
    #[serde(default = "default_merchant_city")]
    pub city: String,
}

impl Default for MerchantSection {
    fn default() -> Self {
        Self {
            pix_key: default_pix_key(),
            name: default_merchant_name(),
            city: default_merchant_city(),
        }
    }
}

/// `[txid]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TxidSection {
    /// Generation strategy for omitted txids.
    #[serde(default)]
    pub strategy: TxidStrategy,
    /// Prefix for generated txids.
    #[serde(default = "default_txid_prefix")]
    pub prefix: String,
}

impl Default for TxidSection {
    fn default() -> Self {
        Self {
            strategy: TxidStrategy::default(),
            prefix: default_txid_prefix(),
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl PixConfig {
    /// Loads configuration using the default resolution rules and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |name| env::var(name).ok())
    }

    /// Loads configuration with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicit or env-selected file is
    /// missing, unreadable, oversized, not UTF-8, not valid TOML, or when the
    /// merged configuration fails validation.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolved = resolve_path(path, &lookup)?;
        validate_path(&resolved.path)?;
        let mut config = match fs::read(&resolved.path) {
            Ok(bytes) => {
                let mut config = Self::parse_bytes(&bytes)?;
                config.source = Some(resolved.path.clone());
                config
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound && !resolved.required => {
                debug!(path = %resolved.path.display(), "config file absent; using defaults");
                Self::default()
            }
            Err(err) => {
                return Err(ConfigError::Io(format!("{}: {err}", resolved.path.display())));
            }
        };
        config.apply_overrides(lookup);
        config.validate()?;
        debug!(
            source = ?config.source,
            strategy = ?config.txid.strategy,
            "loaded pix config"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses raw file bytes without validating.
    fn parse_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Applies environment overrides on top of the file values.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PIX_KEY_ENV_VAR) {
            self.merchant.pix_key = value;
        }
        if let Some(value) = lookup(MERCHANT_NAME_ENV_VAR) {
            self.merchant.name = value;
        }
        if let Some(value) = lookup(MERCHANT_CITY_ENV_VAR) {
            self.merchant.city = value;
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.merchant.validate()?;
        self.txid.validate()
    }

    /// Returns the merchant identity for the payload builder.
    #[must_use]
    pub fn merchant_config(&self) -> MerchantConfig {
        MerchantConfig::new(
            self.merchant.pix_key.trim(),
            self.merchant.name.as_str(),
            self.merchant.city.as_str(),
        )
    }

    /// Returns the transaction id generator described by `[txid]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the prefix is unusable.
    pub fn txid_generator(&self) -> Result<TxidGenerator, ConfigError> {
        let prefix = TxidPrefix::new(self.txid.prefix.as_str())
            .map_err(|err| ConfigError::Invalid(format!("txid.prefix: {err}")))?;
        Ok(TxidGenerator::new(self.txid.strategy, prefix))
    }
}

impl MerchantSection {
    /// Validates the merchant identity.
    fn validate(&self) -> Result<(), ConfigError> {
        let key = self.pix_key.trim();
        if key.is_empty() {
            return Err(ConfigError::Invalid("merchant.pix_key must be non-empty".to_string()));
        }
        if !key.chars().all(is_printable_ascii) {
            return Err(ConfigError::Invalid(
                "merchant.pix_key must be printable ascii".to_string(),
            ));
        }
        if key.len() > MAX_PIX_KEY_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "merchant.pix_key exceeds {MAX_PIX_KEY_LENGTH} characters"
            )));
        }
        let merchant = MerchantConfig::new(key, self.name.as_str(), self.city.as_str());
        if merchant.wire_name().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "merchant.name must contain printable characters".to_string(),
            ));
        }
        if merchant.wire_city().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "merchant.city must contain printable characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl TxidSection {
    /// Validates the txid policy.
    fn validate(&self) -> Result<(), ConfigError> {
        TxidPrefix::new(self.prefix.as_str())
            .map(|_| ())
            .map_err(|err| ConfigError::Invalid(format!("txid.prefix: {err}")))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Config path plus whether its absence is an error.
struct ResolvedPath {
    /// Path to read.
    path: PathBuf,
    /// True when the path was chosen explicitly or via environment.
    required: bool,
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path<F>(path: Option<&Path>, lookup: &F) -> Result<ResolvedPath, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Some(env_path) = lookup(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            required: true,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        required: false,
    })
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Serde default for `merchant.pix_key`.
fn default_pix_key() -> String {
    DEFAULT_PIX_KEY.to_string()
}

/// Serde default for `merchant.name`.
fn default_merchant_name() -> String {
    DEFAULT_MERCHANT_NAME.to_string()
}

/// Serde default for `merchant.city`.
fn default_merchant_city() -> String {
    DEFAULT_MERCHANT_CITY.to_string()
}

/// Serde default for `txid.prefix`.
fn default_txid_prefix() -> String {
    DEFAULT_TXID_PREFIX.to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
