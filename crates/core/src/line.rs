use serde::{Deserialize, Serialize};

use crate::face::Face;
use crate::line_id::LineId;

/// One physical line (or editorial annotation line) on a face of an artifact.
///
/// Invariants: `sequence_index` is strictly increasing across the artifact
/// in parse order; `line_id` is unique within a face but may repeat across
/// faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralLine {
    pub artifact_id: String,
    /// `None` for lines outside any recognized face container.
    pub face: Option<Face>,
    /// Sub-column within the face, when the record declares one.
    pub column: Option<u32>,
    pub line_id: LineId,
    /// Line content with the identifier prefix (and any inline composite
    /// references) stripped.
    pub raw_text: String,
    /// Shallow whitespace tokenization of `raw_text`; position = index.
    pub tokens: Vec<String>,
    /// Structural/physical note (ruling, breakage, blank space) rather than
    /// inscribed content. Consumes a sequence index but is excluded from
    /// content queries.
    pub is_editorial: bool,
    pub is_ruling: bool,
    pub is_blank: bool,
    /// Position within the full ordered line list of the artifact, spanning
    /// all faces.
    pub sequence_index: usize,
}

impl StructuralLine {
    /// True for inscribed content, false for editorial annotation lines.
    pub fn is_content(&self) -> bool {
        !self.is_editorial
    }
}

/// Split a line's text into ordered whitespace-delimited tokens.
/// Deeper sign-level decomposition is deliberately out of scope.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_preserves_order() {
        assert_eq!(tokenize("2(disz)  udu niga"), vec!["2(disz)", "udu", "niga"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn persisted_line_carries_canonical_line_id() {
        let line = StructuralLine {
            artifact_id: "P1".into(),
            face: Some(Face::Front),
            column: None,
            line_id: "3'".parse().unwrap(),
            raw_text: "lugal-e".into(),
            tokens: vec!["lugal-e".into()],
            is_editorial: false,
            is_ruling: false,
            is_blank: false,
            sequence_index: 2,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["line_id"], serde_json::json!("3'"));
        let back: StructuralLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }
}
