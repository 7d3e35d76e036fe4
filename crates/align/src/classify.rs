//! Stage 1 — content-shape pre-classification.
//!
//! Degenerate translation strings are finalized as unmatchable before any
//! structural reasoning, so they can never falsely consume a line slot.

use regex::Regex;

use tabula_core::UnmatchReason;

/// The ordered classifier set. Built once per engine run.
pub struct ShapeClassifiers {
    broken: Regex,
    placeholder: Regex,
    metadata: Regex,
    summary: Regex,
}

impl ShapeClassifiers {
    pub fn new() -> Self {
        Self {
            // A standalone token of three or more dots (or the precomposed
            // ellipsis), anywhere in the string: "..." / "22 … slaves".
            broken: Regex::new(r"(^|\s)(\.{3,}|\u{2026})($|\s)").unwrap(),
            // A standalone run of three or more x's: an unreadable span.
            placeholder: Regex::new(r"(?i)(^|\s)x{3,}($|\s)").unwrap(),
            // Non-content header shapes: basket/label/inventory/caption.
            metadata: Regex::new(r"(?i)^\(?\s*(basket|label|inventory|caption|docket)\b").unwrap(),
            // Tablet-level totals and receipt boilerplate.
            summary: Regex::new(r"(?i)^\s*((grand\s+)?total|sum\s+total|receipt)\b").unwrap(),
        }
    }

    /// First classifier that matches wins; `None` means the string may carry
    /// real content and proceeds to structural matching.
    pub fn classify(&self, text: &str) -> Option<UnmatchReason> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.broken.is_match(trimmed) {
            return Some(UnmatchReason::Broken);
        }
        if self.placeholder.is_match(trimmed) {
            return Some(UnmatchReason::Placeholder);
        }
        if self.metadata.is_match(trimmed) {
            return Some(UnmatchReason::Metadata);
        }
        if self.summary.is_match(trimmed) {
            return Some(UnmatchReason::Summary);
        }
        None
    }
}

impl Default for ShapeClassifiers {
    fn default() -> Self {
        Self::new()
    }
}
