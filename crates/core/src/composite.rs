use serde::{Deserialize, Serialize};

use crate::line_id::LineId;

/// Candidate mapping from one artifact line to an idealized composite text.
///
/// Produced by the parser's cross-reference stripping; read-only downstream.
/// Consumed only as a hint; never alters parsing or matching behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLink {
    pub artifact_id: String,
    /// Canonical fixed-width form, e.g. `C000042`.
    pub composite_id: String,
    /// The artifact line the reference appeared on.
    pub line_id: LineId,
    /// Line number on the composite side, when the reference carries one.
    pub composite_line: Option<u32>,
}
