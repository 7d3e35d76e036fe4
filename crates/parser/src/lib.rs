//! `tabula-parser` — transliteration record parser.
//!
//! Converts one raw transliteration blob into an ordered list of structural
//! lines plus composite-reference links and parse diagnostics. Malformed
//! input degrades to best-effort lines; nothing in here aborts an artifact.

pub mod composite;
pub mod faces;
pub mod ident;
mod parse;

pub use parse::{parse_artifact, ParsedArtifact};
