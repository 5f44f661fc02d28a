//! Tokenize command implementation.
//!
//! Reads one source file, scans it, then prints the diagnostics to standard
//! error and the tokens to standard output.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use loxc_lex::{scan, LexerConfig, ScanOutput};
use tracing::debug;

use crate::commands::traits::Command;
use crate::error::Result;

/// How tokens are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `<KIND> <LEXEME> <LITERAL>` line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file to scan.
    pub path: PathBuf,
    /// Token output format.
    pub format: OutputFormat,
    /// Lexer options after config and flags are merged.
    pub lexer: LexerConfig,
}

/// Whether the scanned file was lexically valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// No lexical errors.
    Clean,
    /// At least one lexical error was reported.
    LexicalErrors,
}

impl ScanStatus {
    /// Exit status used when the source had lexical errors.
    pub const LEXICAL_ERROR_EXIT_CODE: u8 = 65;

    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            ScanStatus::Clean => 0,
            ScanStatus::LexicalErrors => Self::LEXICAL_ERROR_EXIT_CODE,
        }
    }

    fn of(output: &ScanOutput) -> Self {
        if output.had_errors() {
            ScanStatus::LexicalErrors
        } else {
            ScanStatus::Clean
        }
    }
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = ScanStatus;

    fn new(args: TokenizeArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<ScanStatus> {
        debug!(command = Self::name(), path = %self.args.path.display(), "reading source");
        let bytes = std::fs::read(&self.args.path)?;
        let source = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = source {
            debug!("invalid UTF-8 replaced with U+FFFD");
        }

        debug!(
            bytes = bytes.len(),
            unicode_identifiers = self.args.lexer.unicode_identifiers,
            "scanning"
        );
        let output = scan(&source, self.args.lexer);

        let stdout = io::stdout();
        let stderr = io::stderr();
        write_report(&output, self.args.format, &mut stdout.lock(), &mut stderr.lock())?;

        Ok(ScanStatus::of(&output))
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Writes diagnostics to `err`, then tokens to `out`.
pub fn write_report<O, E>(
    output: &ScanOutput,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    O: Write,
    E: Write,
{
    for diagnostic in &output.diagnostics {
        writeln!(err, "{}", diagnostic)?;
    }
    err.flush()?;

    match format {
        OutputFormat::Text => {
            for token in &output.tokens {
                writeln!(out, "{}", token)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &output.tokens)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Execute the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<ScanStatus> {
    TokenizeCommand::new(args).execute()
}
