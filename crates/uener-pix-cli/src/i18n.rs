// crates/uener-pix-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings in English and Brazilian Portuguese.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The uener-pix CLI stores user-facing strings in a small translation
//! catalog so operators can read messages in English or Portuguese. All
//! runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Brazilian Portuguese.
    Pt,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_', '.']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Pt];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `error`).
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"error"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "uener-pix {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.serialize_failed", "Failed to serialize output: {error}"),
    ("input.read_failed", "Failed to read payload from stdin: {error}"),
    ("input.read_too_large", "Refusing to read a payload larger than {limit} bytes from stdin."),
    ("input.not_utf8", "Payload read from stdin is not valid UTF-8."),
    ("config.load_failed", "Failed to load config: {error}"),
    (
        "config.validate.ok",
        "Config valid (merchant {name}, city {city}, txid strategy {strategy}).",
    ),
    ("generate.amount_invalid", "Invalid amount '{value}': {error}"),
    ("generate.txid_invalid", "Invalid transaction id '{value}': {error}"),
    ("generate.merchant_invalid", "Merchant identity is unusable: {error}"),
    ("generate.failed", "Failed to generate payload: {error}"),
    ("payload.malformed", "Malformed payload: {error}"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'pt'."),
];

/// Static Brazilian Portuguese catalog entries.
const CATALOG_PT: &[(&str, &str)] = &[
    ("main.version", "uener-pix {version}"),
    ("output.stream.stdout", "saída padrão"),
    ("output.stream.stderr", "saída de erro"),
    ("output.stream.unknown", "saída"),
    ("output.write_failed", "Falha ao escrever em {stream}: {error}"),
    ("output.serialize_failed", "Falha ao serializar a saída: {error}"),
    ("input.read_failed", "Falha ao ler o payload da entrada padrão: {error}"),
    (
        "input.read_too_large",
        "Recusando ler da entrada padrão um payload maior que {limit} bytes.",
    ),
    ("input.not_utf8", "O payload lido da entrada padrão não é UTF-8 válido."),
    ("config.load_failed", "Falha ao carregar a configuração: {error}"),
    (
        "config.validate.ok",
        "Configuração válida (recebedor {name}, cidade {city}, estratégia de txid {strategy}).",
    ),
    ("generate.amount_invalid", "Valor inválido '{value}': {error}"),
    ("generate.txid_invalid", "Identificador de transação inválido '{value}': {error}"),
    ("generate.merchant_invalid", "Identidade do recebedor inutilizável: {error}"),
    ("generate.failed", "Falha ao gerar o payload: {error}"),
    ("payload.malformed", "Payload malformado: {error}"),
    ("i18n.lang.invalid_env", "Valor inválido para {env}: {value}. Esperado 'en' ou 'pt'."),
];

/// Returns the raw catalog entries for the requested locale.
pub(crate) const fn catalog_entries_for(
    locale: Locale,
) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Pt => CATALOG_PT,
    }
}

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_PT_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    let cell = match locale {
        Locale::En => &CATALOG_EN_MAP,
        Locale::Pt => &CATALOG_PT_MAP,
    };
    cell.get_or_init(|| catalog_entries_for(locale).iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_for(current_locale(), key, args)
}

/// Translates `key` for an explicit locale while substituting `args`.
#[must_use]
pub fn translate_for(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
