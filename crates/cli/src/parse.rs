//! `tabula parse` — parse one transliteration record to structural lines.

use std::path::PathBuf;

use tabula_parser::parse_artifact;

use crate::io::{fallback_id, read_input, write_json};
use crate::CliError;

pub fn cmd_parse(
    input: String,
    id: Option<String>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let text = read_input(&input)?;
    let fallback = id.unwrap_or_else(|| fallback_id(&input));
    let parsed = parse_artifact(&fallback, &text);

    for diag in &parsed.diagnostics {
        eprintln!("warning: {diag}");
    }

    if let Some(ref path) = output {
        write_json(path, &parsed)?;
        eprintln!("wrote {}", path.display());
    }
    if json {
        let rendered = serde_json::to_string_pretty(&parsed)
            .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
        println!("{rendered}");
    }

    let editorial = parsed.lines.iter().filter(|l| l.is_editorial).count();
    eprintln!(
        "{}: {} lines ({} editorial), {} composite links, {} diagnostics",
        parsed.artifact_id,
        parsed.lines.len(),
        editorial,
        parsed.links.len(),
        parsed.diagnostics.len(),
    );
    Ok(())
}
