//! Inline composite-text cross-reference stripping.
//!
//! Content lines may embed references to an idealized composite edition
//! (`>>C42`, optionally with a composite-side line number: `>>C42 7`).
//! These are extracted into a side table and removed from the line's text
//! so they do not pollute content-level analysis.

use regex::Regex;

/// Width of the canonical zero-padded composite identifier (`C000042`).
const COMPOSITE_ID_WIDTH: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeRef {
    /// Canonical fixed-width form.
    pub composite_id: String,
    pub composite_line: Option<u32>,
}

/// Build the reference pattern once per artifact.
pub fn reference_pattern() -> Regex {
    // >>C42, >> C042, >>c42 7: tolerant of spacing, case and leading zeros.
    Regex::new(r">>\s*[Cc]\s*0*(\d+)(?:\s+(\d+))?").unwrap()
}

/// Extract every composite reference from `text` and return the cleaned
/// text alongside the references, in order of appearance.
pub fn strip_references(re: &Regex, text: &str) -> (String, Vec<CompositeRef>) {
    let mut refs = Vec::new();
    let mut cleaned = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in re.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        cleaned.push_str(&text[last_end..whole.start()]);
        last_end = whole.end();

        let number: u64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => continue, // digit run too long to be a real identifier
        };
        let composite_line = caps.get(2).and_then(|m| m.as_str().parse().ok());
        refs.push(CompositeRef {
            composite_id: format!("C{:0width$}", number, width = COMPOSITE_ID_WIDTH),
            composite_line,
        });
    }
    cleaned.push_str(&text[last_end..]);

    // Removal can leave doubled interior spaces; tokenization downstream is
    // whitespace-based, so collapsing here is lossless.
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    (cleaned, refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_normalizes_reference() {
        let re = reference_pattern();
        let (text, refs) = strip_references(&re, "lugal-e >>C42 7 e2-a");
        assert_eq!(text, "lugal-e e2-a");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].composite_id, "C000042");
        assert_eq!(refs[0].composite_line, Some(7));
    }

    #[test]
    fn reference_without_composite_line() {
        let re = reference_pattern();
        let (text, refs) = strip_references(&re, ">>C001234 lugal");
        assert_eq!(text, "lugal");
        assert_eq!(refs[0].composite_id, "C001234");
        assert_eq!(refs[0].composite_line, None);
    }

    #[test]
    fn multiple_references_in_order() {
        let re = reference_pattern();
        let (text, refs) = strip_references(&re, "a >>c1 b >> C 0002 c");
        assert_eq!(text, "a b c");
        let ids: Vec<&str> = refs.iter().map(|r| r.composite_id.as_str()).collect();
        assert_eq!(ids, vec!["C000001", "C000002"]);
    }

    #[test]
    fn text_without_references_unchanged() {
        let re = reference_pattern();
        let (text, refs) = strip_references(&re, "ki ab-ba-sa6-ga-ta");
        assert_eq!(text, "ki ab-ba-sa6-ga-ta");
        assert!(refs.is_empty());
    }
}
