//! Face/container header recognition.
//!
//! A header names either a face (sets the current-face context), a
//! sub-column within a face (positional metadata only), or the physical
//! object itself (no line content, ignored). Anything else is dropped with
//! a diagnostic by the caller.

use tabula_core::roman::parse_roman;
use tabula_core::Face;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Face(Face),
    Column(u32),
    /// Physical object designation (`tablet`, `envelope`, …).
    Object,
    Unknown,
}

/// Classify the name portion of a container header (text after `@`).
pub fn classify_header(name: &str) -> Header {
    let trimmed = name.trim();
    if let Some(n) = parse_column(trimmed) {
        return Header::Column(n);
    }
    if let Some(face) = Face::from_alias(trimmed) {
        return Header::Face(face);
    }
    if Face::is_object_kind(trimmed) {
        return Header::Object;
    }
    Header::Unknown
}

/// Column designators: `column 2`, `col. 2`, `col 2`, or a bare roman
/// numeral (`ii`). Columns never alter the face enumeration.
fn parse_column(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    for prefix in ["column", "col.", "col"] {
        if let Some(rest) = lower.strip_prefix(prefix) {
            let rest = rest.trim();
            if !rest.is_empty() {
                if let Ok(n) = rest.parse::<u32>() {
                    return Some(n);
                }
                return parse_roman(rest);
            }
        }
    }
    parse_roman(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_headers() {
        assert_eq!(classify_header("obverse"), Header::Face(Face::Front));
        assert_eq!(classify_header("Rev."), Header::Face(Face::Back));
        assert_eq!(classify_header("left edge"), Header::Face(Face::LeftEdge));
        assert_eq!(classify_header("seal impression"), Header::Face(Face::Seal));
    }

    #[test]
    fn column_headers() {
        assert_eq!(classify_header("column 2"), Header::Column(2));
        assert_eq!(classify_header("col. 3"), Header::Column(3));
        assert_eq!(classify_header("ii"), Header::Column(2));
        assert_eq!(classify_header("col iv"), Header::Column(4));
    }

    #[test]
    fn object_headers_ignored() {
        assert_eq!(classify_header("tablet"), Header::Object);
        assert_eq!(classify_header("envelope"), Header::Object);
    }

    #[test]
    fn unknown_headers() {
        assert_eq!(classify_header("side c"), Header::Unknown);
        assert_eq!(classify_header(""), Header::Unknown);
    }
}
