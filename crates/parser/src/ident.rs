//! Line-identifier grammar for content lines.
//!
//! Recognized forms, in priority order: `3.`, `3'.`, `3.b.`, `3.b1.`
//! (primed sub-lines `3'.b.` also occur in late-period records). The prime
//! marker is retained; `3` and `3'` are different physical lines.

use tabula_core::{LineId, SubUnit};

/// Recognize a content line's leading identifier token.
///
/// Returns the identifier and the remaining text with the prefix stripped.
/// `None` means the line carries no recognizable identifier; the caller
/// assigns a synthetic one so no input content is dropped.
pub fn recognize(line: &str) -> Option<(LineId, &str)> {
    let s = line.trim_start();

    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    let primary: u32 = s[..digits_end].parse().ok()?;

    let mut rest = &s[digits_end..];
    let prime = strip_prime(&mut rest);
    rest = rest.strip_prefix('.')?;

    // Sub-line notation: letter, optional counter, terminating dot.
    if let Some((sub, after)) = sub_unit(rest) {
        return Some((LineId { primary, prime, sub: Some(sub) }, after.trim_start()));
    }

    // Simple or primed line: the dot must end the token. Rejecting a
    // non-space successor keeps decimals like "3.5 kg" out of the grammar.
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return Some((LineId { primary, prime, sub: None }, rest.trim_start()));
    }

    None
}

/// Strip one interpolation marker. ASCII apostrophe, the typographic prime
/// and the right single quote all occur in the source data.
fn strip_prime(rest: &mut &str) -> bool {
    for marker in ["'", "\u{2032}", "\u{2019}"] {
        if let Some(r) = rest.strip_prefix(marker) {
            *rest = r;
            return true;
        }
    }
    false
}

fn sub_unit(s: &str) -> Option<(SubUnit, &str)> {
    let letter = s.chars().next()?;
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let tail = &s[letter.len_utf8()..];
    let digits_end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
    let counter = if digits_end > 0 {
        Some(tail[..digits_end].parse().ok()?)
    } else {
        None
    };
    let after = tail[digits_end..].strip_prefix('.')?;
    if after.is_empty() || after.starts_with(char::is_whitespace) {
        Some((SubUnit { letter, counter }, after))
    } else {
        None
    }
}
