use serde::Serialize;

use tabula_core::line::tokenize;
use tabula_core::{CompositeLink, Diagnostic, Face, LineId, StructuralLine};

use crate::composite;
use crate::faces::{self, Header};
use crate::ident;

/// Parsed form of one raw transliteration record.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedArtifact {
    pub artifact_id: String,
    pub lines: Vec<StructuralLine>,
    pub links: Vec<CompositeLink>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse one raw text blob for one artifact.
///
/// Never fails: malformed input degrades to best-effort lines and
/// diagnostics. `fallback_id` is used when the blob carries no artifact
/// header of its own.
pub fn parse_artifact(fallback_id: &str, text: &str) -> ParsedArtifact {
    let ref_re = composite::reference_pattern();

    let mut artifact_id = fallback_id.to_string();
    let mut lines: Vec<StructuralLine> = Vec::new();
    let mut links: Vec<CompositeLink> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let mut face: Option<Face> = None;
    let mut column: Option<u32> = None;
    let mut sequence_index = 0usize;
    // Synthetic identifiers start above every real primary in the blob, so
    // editorial and unclassifiable lines can never collide with a numbered
    // line on their face.
    let mut next_synthetic = highest_primary(text).saturating_add(1);
    let mut saw_header = false;
    let mut saw_any = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        // Artifact header: `&P100542 = Ur III receipt`.
        if let Some(rest) = line.trim_start().strip_prefix('&') {
            if saw_any {
                diagnostics.push(Diagnostic::new(
                    artifact_id.clone(),
                    Some(line_no),
                    "artifact header after first line ignored",
                ));
            } else {
                let header_id = rest
                    .split(['=', ' '])
                    .next()
                    .unwrap_or("")
                    .trim();
                if header_id.is_empty() {
                    diagnostics.push(Diagnostic::new(
                        artifact_id.clone(),
                        Some(line_no),
                        "empty artifact header",
                    ));
                } else {
                    artifact_id = header_id.to_string();
                }
                saw_header = true;
            }
            saw_any = true;
            continue;
        }
        saw_any = true;

        // Container headers set context and are discarded from the stream.
        if let Some(name) = line.trim_start().strip_prefix('@') {
            match faces::classify_header(name) {
                Header::Face(f) => {
                    face = Some(f);
                    column = None;
                }
                Header::Column(n) => column = Some(n),
                Header::Object => {}
                Header::Unknown => diagnostics.push(Diagnostic::new(
                    artifact_id.clone(),
                    Some(line_no),
                    format!("unrecognized container header '@{}'", name.trim()),
                )),
            }
            continue;
        }

        // Editorial marker lines: physical-state notes. Emitted so sequence
        // numbering and positional alignment stay consistent.
        if let Some(note) = line.trim_start().strip_prefix('$') {
            let note = note.trim();
            let lower = note.to_ascii_lowercase();
            let id = LineId::new(next_synthetic);
            next_synthetic = next_synthetic.saturating_add(1);
            lines.push(StructuralLine {
                artifact_id: artifact_id.clone(),
                face,
                column,
                line_id: id,
                raw_text: note.to_string(),
                tokens: tokenize(note),
                is_editorial: true,
                is_ruling: lower.contains("ruling"),
                is_blank: lower.contains("blank"),
                sequence_index,
            });
            sequence_index += 1;
            continue;
        }

        // Annotation lines carry no content of their own.
        if line.trim_start().starts_with('#') {
            continue;
        }

        // Content line.
        let (line_id, content) = match ident::recognize(line) {
            Some((id, rest)) => (id, rest),
            None => {
                diagnostics.push(Diagnostic::new(
                    artifact_id.clone(),
                    Some(line_no),
                    format!("no line identifier, assigned synthetic '{}'", next_synthetic),
                ));
                let id = LineId::new(next_synthetic);
                next_synthetic = next_synthetic.saturating_add(1);
                (id, line.trim_start())
            }
        };

        let (raw_text, refs) = composite::strip_references(&ref_re, content);
        for r in refs {
            links.push(CompositeLink {
                artifact_id: artifact_id.clone(),
                composite_id: r.composite_id,
                line_id,
                composite_line: r.composite_line,
            });
        }

        lines.push(StructuralLine {
            artifact_id: artifact_id.clone(),
            face,
            column,
            line_id,
            tokens: tokenize(&raw_text),
            raw_text,
            is_editorial: false,
            is_ruling: false,
            is_blank: false,
            sequence_index,
        });
        sequence_index += 1;
    }

    if !saw_header {
        diagnostics.push(Diagnostic::new(
            artifact_id.clone(),
            None,
            "no artifact header, using supplied identifier",
        ));
    }

    ParsedArtifact {
        artifact_id,
        lines,
        links,
        diagnostics,
    }
}

/// Largest primary number any content line in the blob declares.
fn highest_primary(text: &str) -> u32 {
    text.lines()
        .filter_map(|line| ident::recognize(line.trim_end()))
        .map(|(id, _)| id.primary)
        .max()
        .unwrap_or(0)
}
