//! `tabula-core` — shared corpus data model.
//!
//! Types produced by the parser and consumed by the alignment engine:
//! faces, structured line identifiers, structural lines, translation
//! records and their outcomes. No IO and no engine logic lives here.

pub mod composite;
pub mod diag;
pub mod face;
pub mod line;
pub mod line_id;
pub mod roman;
pub mod translation;

pub use composite::CompositeLink;
pub use diag::Diagnostic;
pub use face::Face;
pub use line::StructuralLine;
pub use line_id::{LineId, SubUnit};
pub use translation::{LineRef, MatchMethod, Outcome, TranslationRecord, UnmatchReason};
