// crates/uener-pix-cli/src/main.rs
// ============================================================================
// Module: Uener PIX CLI Entry Point
// Description: Command dispatcher for generating and checking PIX BR Codes.
// Purpose: Provide a safe, localized CLI over the payload engine.
// Dependencies: clap, serde_jcs, thiserror, time, tracing, uener-pix-{config,core}
// ============================================================================

//! ## Overview
//! `uener-pix` generates static PIX payloads for the configured merchant and
//! validates, decodes, or inspects payloads produced elsewhere. Structured
//! output is canonical JSON on stdout; diagnostics go to stderr. All
//! user-facing strings are routed through the i18n catalog.
//!
//! Security posture: payload arguments and config files are untrusted and are
//! read under hard size limits.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;
use uener_pix_cli::i18n::Locale;
use uener_pix_cli::i18n::set_locale;
use uener_pix_cli::logging::init_logging;
use uener_pix_cli::t;
use uener_pix_config::PixConfig;
use uener_pix_core::Amount;
use uener_pix_core::BrCode;
use uener_pix_core::PayloadBuilder;
use uener_pix_core::TransactionId;
use uener_pix_core::TxidStrategy;
use uener_pix_core::check_payload;
use uener_pix_core::decode_tree;
use uener_pix_core::generate_response;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a payload read from stdin.
const MAX_PAYLOAD_INPUT_BYTES: usize = 4096;
/// Argument value that selects stdin as the payload source.
const STDIN_MARKER: &str = "-";
/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "UENER_PIX_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "uener-pix", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `UENER_PIX_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a payload for the configured merchant.
    Generate(GenerateCommand),
    /// Check a payload's CRC and structure.
    Validate(PayloadArgs),
    /// Print the TLV field tree of a payload.
    Decode(PayloadArgs),
    /// Print the named fields of a payload.
    Inspect(PayloadArgs),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for payload generation.
#[derive(Args, Debug)]
struct GenerateCommand {
    /// Amount in BRL (for example `520` or `10.50`).
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    amount: String,
    /// Reference label; generated from the configured strategy when omitted.
    #[arg(long, value_name = "TXID")]
    txid: Option<String>,
    /// Optional config file path (defaults to uener-pix.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Positional payload argument shared by the inspection commands.
#[derive(Args, Debug)]
struct PayloadArgs {
    /// BR Code payload, or `-` to read it from stdin.
    #[arg(value_name = "PAYLOAD", allow_hyphen_values = true)]
    payload: String,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the configuration.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to uener-pix.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for generated payloads.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Canonical JSON response.
    Json,
    /// Raw payload only.
    Text,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Brazilian Portuguese.
    Pt,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Pt => Self::Pt,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Generate(command) => command_generate(&command),
        Commands::Validate(args) => command_validate(&args),
        Commands::Decode(args) => command_decode(&args),
        Commands::Inspect(args) => command_inspect(&args),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(&help).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Payload Commands
// ============================================================================

/// Executes the `generate` command.
fn command_generate(command: &GenerateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let builder = PayloadBuilder::new(&config.merchant_config())
        .map_err(|err| CliError::new(t!("generate.merchant_invalid", error = err)))?;
    let amount: Amount = command.amount.parse::<Amount>().map_err(|err| {
        CliError::new(t!("generate.amount_invalid", value = command.amount, error = err))
    })?;
    let txid = match &command.txid {
        Some(value) => TransactionId::parse(value.as_str()).map_err(|err| {
            CliError::new(t!("generate.txid_invalid", value = value, error = err))
        })?,
        None => config
            .txid_generator()
            .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?
            .generate(),
    };
    let response = generate_response(&builder, &amount, &txid, OffsetDateTime::now_utc())
        .map_err(|err| CliError::new(t!("generate.failed", error = err)))?;
    debug!(txid = %txid, validado = response.validado, "generate command finished");
    match command.format {
        OutputFormat::Json => write_canonical_json(&response)?,
        OutputFormat::Text => write_stdout_line(&response.payload)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `validate` command; exits non-zero for invalid payloads.
fn command_validate(args: &PayloadArgs) -> CliResult<ExitCode> {
    let payload = resolve_payload(&args.payload)?;
    let report = check_payload(&payload);
    write_canonical_json(&report)?;
    Ok(if report.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Executes the `decode` command.
fn command_decode(args: &PayloadArgs) -> CliResult<ExitCode> {
    let payload = resolve_payload(&args.payload)?;
    let tree = decode_tree(&payload)
        .map_err(|err| CliError::new(t!("payload.malformed", error = err)))?;
    write_canonical_json(&tree)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `inspect` command.
fn command_inspect(args: &PayloadArgs) -> CliResult<ExitCode> {
    let payload = resolve_payload(&args.payload)?;
    let code = BrCode::parse(&payload)
        .map_err(|err| CliError::new(t!("payload.malformed", error = err)))?;
    write_canonical_json(&code)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let merchant = config.merchant_config();
    let strategy = match config.txid.strategy {
        TxidStrategy::Timestamp => "timestamp",
        TxidStrategy::Random => "random",
    };
    write_stdout_line(&t!(
        "config.validate.ok",
        name = merchant.wire_name(),
        city = merchant.wire_city(),
        strategy = strategy
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads and validates configuration, localizing failures.
fn load_config(path: Option<&Path>) -> CliResult<PixConfig> {
    PixConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Errors returned by bounded payload reads.
#[derive(Debug)]
enum ReadLimitError {
    /// Read failure.
    Io(std::io::Error),
    /// Input exceeds the configured limit.
    TooLarge {
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// Input is not UTF-8.
    NotUtf8,
}

/// Returns the payload argument, reading stdin when it is `-`.
fn resolve_payload(argument: &str) -> CliResult<String> {
    if argument != STDIN_MARKER {
        return Ok(argument.trim().to_string());
    }
    let stdin = std::io::stdin();
    read_text_with_limit(stdin.lock(), MAX_PAYLOAD_INPUT_BYTES).map_err(|err| match err {
        ReadLimitError::Io(err) => CliError::new(t!("input.read_failed", error = err)),
        ReadLimitError::TooLarge {
            limit,
        } => CliError::new(t!("input.read_too_large", limit = limit)),
        ReadLimitError::NotUtf8 => CliError::new(t!("input.not_utf8")),
    })
}

/// Reads trimmed UTF-8 text from `reader` while enforcing a hard size limit.
fn read_text_with_limit(reader: impl Read, max_bytes: usize) -> Result<String, ReadLimitError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(read_limit).read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            limit: max_bytes,
        });
    }
    let text = String::from_utf8(bytes).map_err(|_| ReadLimitError::NotUtf8)?;
    Ok(text.trim().to_string())
}

/// Resolves the output locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes canonical JSON to stdout followed by a newline.
fn write_canonical_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(t!("output.serialize_failed", error = err)))?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
