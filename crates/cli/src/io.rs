//! Shared IO helpers: stdin-aware input reading, translation CSV loading,
//! JSON output writing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tabula_align::AlignConfig;
use tabula_core::TranslationRecord;

use crate::CliError;

/// Read a whole input, with `-` meaning stdin.
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io(format!("cannot read stdin: {e}")))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {path}: {e}")))
}

/// Artifact identifier to use when the input carries no header of its own:
/// the file stem, or `stdin` when reading from a pipe.
pub fn fallback_id(path: &str) -> String {
    if path == "-" {
        return "stdin".into();
    }
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[derive(Debug, Deserialize)]
struct TranslationRow {
    text: String,
    #[serde(default)]
    language: String,
}

/// Load a translation CSV. Header row is required; `text` is the only
/// mandatory column, `language` defaults to empty. Row order is submission
/// order and is preserved in `sequence_index`.
pub fn load_translations(path: &Path) -> Result<Vec<TranslationRecord>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<TranslationRow>().enumerate() {
        let row = row.map_err(|e| {
            CliError::parse(format!("{}: row {}: {e}", path.display(), index + 1))
        })?;
        records.push(TranslationRecord::new(row.text, row.language, index));
    }
    Ok(records)
}

/// Load engine thresholds, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AlignConfig, CliError> {
    let Some(path) = path else {
        return Ok(AlignConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
    AlignConfig::from_toml(&text).map_err(|e| CliError::config(e.to_string()))
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))
}
