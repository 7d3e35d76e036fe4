use serde::{Deserialize, Serialize};

use crate::face::Face;
use crate::line_id::LineId;

/// Reference to a resolved structural line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRef {
    pub face: Option<Face>,
    pub line_id: LineId,
    pub sequence_index: usize,
}

/// How a matched translation was aligned to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    FaceLine,
    FacePrimeLine,
    BareLine,
    SubLine,
    BarePrimeLine,
    Positional,
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FaceLine => write!(f, "face_line"),
            Self::FacePrimeLine => write!(f, "face_prime_line"),
            Self::BareLine => write!(f, "bare_line"),
            Self::SubLine => write!(f, "sub_line"),
            Self::BarePrimeLine => write!(f, "bare_prime_line"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

/// Why a translation can never be aligned to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchReason {
    /// A run of three or more dots: textual lacuna, not content.
    Broken,
    /// A run of three or more `x` characters: unreadable span.
    Placeholder,
    /// Known non-content header (basket, label, inventory).
    Metadata,
    /// Tablet-level total or receipt boilerplate.
    Summary,
    /// The whole artifact's translation set is dictionary-style content.
    LexicalGlossary,
}

impl std::fmt::Display for UnmatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Broken => write!(f, "broken"),
            Self::Placeholder => write!(f, "placeholder"),
            Self::Metadata => write!(f, "metadata"),
            Self::Summary => write!(f, "summary"),
            Self::LexicalGlossary => write!(f, "lexical_glossary"),
        }
    }
}

/// Final disposition of one translation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Matched {
        line: LineRef,
        confidence: f64,
        method: MatchMethod,
    },
    Unmatchable {
        reason: UnmatchReason,
    },
    Unresolved,
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

/// One free-text translation unit, scoped to one artifact, in original
/// submission order. `outcome` is the sole mutable field; a re-ingestion
/// recomputes every outcome from scratch rather than patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub text: String,
    pub language: String,
    pub sequence_index: usize,
    pub outcome: Outcome,
}

impl TranslationRecord {
    pub fn new(text: impl Into<String>, language: impl Into<String>, sequence_index: usize) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            sequence_index,
            outcome: Outcome::Unresolved,
        }
    }
}
