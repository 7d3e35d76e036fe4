//! `tabula` — transliteration parsing and translation alignment, headless.

mod align;
mod exit_codes;
mod ingest;
mod io;
mod parse;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Parse inscription transliterations and align free-text translations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one transliteration record into structural lines
    #[command(after_help = "\
Examples:
  tabula parse P100542.atf --json
  tabula parse P100542.atf --output P100542.lines.json
  cat record.atf | tabula parse - --id P100542 --json")]
    Parse {
        /// Transliteration file (- for stdin)
        input: String,

        /// Artifact identifier when the input has no header
        #[arg(long)]
        id: Option<String>,

        /// Print JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write JSON to file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Align a translation CSV against one transliteration record
    #[command(after_help = "\
The CSV must carry a header row; `text` is required, `language` optional.

Examples:
  tabula align P100542.atf P100542.csv --json
  tabula align P100542.atf P100542.csv --config thresholds.toml -o out.json")]
    Align {
        /// Transliteration file (- for stdin)
        input: String,

        /// Translation CSV in submission order
        translations: PathBuf,

        /// Threshold config TOML (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write JSON to file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Batch-process a corpus directory of transliterations
    #[command(after_help = "\
Writes <id>.lines.json for every artifact, plus <id>.outcomes.json for each
artifact with a matching <stem>.csv under --translations.

Examples:
  tabula ingest corpus/ --out build/
  tabula ingest corpus/ --out build/ --translations translations/ --workers 8")]
    Ingest {
        /// Directory of .atf / .txt transliteration files
        input: PathBuf,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// Directory of per-artifact translation CSVs
        #[arg(long)]
        translations: Option<PathBuf>,

        /// Threshold config TOML
        #[arg(long)]
        config: Option<PathBuf>,

        /// Worker thread count (defaults to available parallelism)
        #[arg(long, env = "TABULA_WORKERS")]
        workers: Option<usize>,
    },

    /// Validate a threshold config without running anything
    Validate {
        /// Threshold config TOML
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, id, json, output } => parse::cmd_parse(input, id, json, output),
        Commands::Align { input, translations, config, json, output } => {
            align::cmd_align(input, translations, config, json, output)
        }
        Commands::Ingest { input, out, translations, config, workers } => {
            ingest::cmd_ingest(input, out, translations, config, workers)
        }
        Commands::Validate { config } => align::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: Some("see `tabula validate` for config checking".into()),
        }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }
}
