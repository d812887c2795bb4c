//! Output modes and error reporting shared by every `fb` subcommand.
//!
//! The mode comes from the first source that names a known one:
//! `--format`, then `--json`, then the `FORMAT` env var, then `output` in the
//! `[display]` config section. With none of those, a terminal gets
//! [`OutputMode::Pretty`] and a pipe gets [`OutputMode::Text`].

use clap::ValueEnum;
use feedboard_core::{BoardError, ErrorCode};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

const RULE_WIDTH: usize = 64;

/// Horizontal rule under pretty headings and at the end of a board.
pub fn rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", "─".repeat(RULE_WIDTH))
}

/// Heading line followed by a rule.
pub fn heading(w: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(w, "{title}")?;
    rule(w)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Columns with icons, previews and separators.
    Pretty,
    /// One row per task, for pipes and scripts.
    Text,
    Json,
}

impl OutputMode {
    fn from_name(raw: &str) -> Option<Self> {
        Self::from_str(raw.trim(), true).ok()
    }
}

/// Every place an output mode can come from, highest priority first.
#[derive(Debug, Default)]
struct ModeSources<'a> {
    flag: Option<OutputMode>,
    json: bool,
    env: Option<&'a str>,
    config: Option<&'a str>,
    tty: bool,
}

impl ModeSources<'_> {
    fn resolve(&self) -> OutputMode {
        // Unrecognized env or config values are skipped, not errors.
        self.flag
            .or_else(|| self.json.then_some(OutputMode::Json))
            .or_else(|| self.env.and_then(OutputMode::from_name))
            .or_else(|| self.config.and_then(OutputMode::from_name))
            .unwrap_or(if self.tty {
                OutputMode::Pretty
            } else {
                OutputMode::Text
            })
    }
}

/// Resolve the mode for this process from flags, `FORMAT`, config and stdout.
pub fn resolve_output_mode(
    flag: Option<OutputMode>,
    json: bool,
    config: Option<&str>,
) -> OutputMode {
    let env = std::env::var("FORMAT").ok();
    ModeSources {
        flag,
        json,
        env: env.as_deref(),
        config,
        tty: io::stdout().is_terminal(),
    }
    .resolve()
}

/// Write `value` to stdout: serialized for JSON, through `text` or `pretty`
/// otherwise.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text(value, &mut out)?,
        OutputMode::Pretty => pretty(value, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// An error as the user sees it.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Stable `E####` code.
    pub error_code: &'static str,
}

impl CliError {
    /// `message` tagged with `code`, suggesting the code's hint.
    pub fn coded(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            suggestion: code.hint().map(str::to_string),
            error_code: code.code(),
        }
    }
}

impl From<&BoardError> for CliError {
    fn from(err: &BoardError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: Some(err.suggestion()),
            error_code: err.error_code().code(),
        }
    }
}

fn write_error(mode: OutputMode, error: &CliError, out: &mut dyn Write) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        serde_json::to_writer_pretty(&mut *out, &serde_json::json!({ "error": error }))?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "error[{}]: {}", error.error_code, error.message)?;
    if let Some(suggestion) = &error.suggestion {
        writeln!(out, "  hint: {suggestion}")?;
    }
    Ok(())
}

/// Report `error` on stderr in `mode`.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    write_error(mode, error, &mut io::stderr().lock())
}
