//! `tabula align` — reconcile a translation CSV against one transliteration.

use std::path::PathBuf;

use serde::Serialize;

use tabula_align::{run, AlignSummary};
use tabula_core::TranslationRecord;
use tabula_parser::parse_artifact;

use crate::io::{fallback_id, load_config, load_translations, read_input, write_json};
use crate::CliError;

#[derive(Debug, Serialize)]
pub struct AlignOutput {
    pub artifact_id: String,
    pub records: Vec<TranslationRecord>,
    pub summary: AlignSummary,
}

pub fn cmd_align(
    input: String,
    translations: PathBuf,
    config: Option<PathBuf>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = load_config(config.as_deref())?;
    let text = read_input(&input)?;
    let parsed = parse_artifact(&fallback_id(&input), &text);
    let records = load_translations(&translations)?;

    let result = run(&config, &parsed.lines, records);
    let out = AlignOutput {
        artifact_id: parsed.artifact_id,
        records: result.records,
        summary: result.summary,
    };

    if let Some(ref path) = output {
        write_json(path, &out)?;
        eprintln!("wrote {}", path.display());
    }
    if json {
        let rendered = serde_json::to_string_pretty(&out)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        println!("{rendered}");
    }

    let s = &out.summary;
    eprintln!(
        "{}: {} records — {} matched, {} unmatchable, {} unresolved",
        out.artifact_id, s.total, s.matched, s.unmatchable, s.unresolved,
    );
    Ok(())
}

/// `tabula validate` — check a threshold config without running anything.
pub fn cmd_validate(config: PathBuf) -> Result<(), CliError> {
    load_config(Some(&config))?;
    eprintln!("{}: ok", config.display());
    Ok(())
}
