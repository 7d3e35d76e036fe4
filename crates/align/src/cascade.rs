//! Stage 3 — explicit-pattern cascade.
//!
//! An ordered list of pure recognizers over the leading text of a
//! translation string. The first recognizer that matches wins; their
//! preconditions partition on the presence of a face name, an interpolation
//! marker, and a sub-unit, so no string can satisfy two of them at once.
//! Each pattern class carries a fixed confidence reflecting how unambiguous
//! that notation is in the source data.

use tabula_core::roman::parse_roman;
use tabula_core::{Face, LineId, MatchMethod, StructuralLine, SubUnit};

pub const CONF_FACE_LINE: f64 = 0.95;
pub const CONF_FACE_PRIME_LINE: f64 = 0.90;
pub const CONF_BARE_LINE: f64 = 0.75;
pub const CONF_SUB_LINE: f64 = 0.65;
pub const CONF_BARE_PRIME_LINE: f64 = 0.60;

/// A line reference extracted from translation text, before resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub face: Option<Face>,
    pub line_id: LineId,
    pub method: MatchMethod,
    pub confidence: f64,
}

/// Apply the cascade; the first matching recognizer wins.
pub fn extract(text: &str) -> Option<Candidate> {
    const RECOGNIZERS: &[fn(&str) -> Option<Candidate>] = &[
        face_line,
        face_prime_line,
        bare_line,
        sub_line,
        bare_prime_line,
    ];
    RECOGNIZERS.iter().find_map(|recognize| recognize(text))
}

/// Face name + plain line identifier: `o 3 text`, `rev. 12 text`,
/// `obv. ii 3 text`. The face word anchors the reading, so no trailing
/// separator is required.
pub fn face_line(text: &str) -> Option<Candidate> {
    let n = face_first(text)?;
    if n.id.prime {
        return None;
    }
    Some(Candidate {
        face: Some(n.face),
        line_id: n.id,
        method: MatchMethod::FaceLine,
        confidence: CONF_FACE_LINE,
    })
}

/// Face name + interpolated identifier, in either declaration order:
/// `o 3' text` or `3' o text`.
pub fn face_prime_line(text: &str) -> Option<Candidate> {
    let n = face_first(text).or_else(|| prime_then_face(text))?;
    if !n.id.prime {
        return None;
    }
    Some(Candidate {
        face: Some(n.face),
        line_id: n.id,
        method: MatchMethod::FacePrimeLine,
        confidence: CONF_FACE_PRIME_LINE,
    })
}

/// Bare line identifier, no face: `3. text`, `3: text`, `(3) text`,
/// `l. 3 text`. A plain unpunctuated number is NOT accepted: `22 mana
/// copper` is a quantity, not a line reference.
pub fn bare_line(text: &str) -> Option<Candidate> {
    let (id, anchored) = bare(text)?;
    if id.prime || id.sub.is_some() || !anchored {
        return None;
    }
    Some(Candidate {
        face: None,
        line_id: id,
        method: MatchMethod::BareLine,
        confidence: CONF_BARE_LINE,
    })
}

/// Sub-unit notation embedded directly in the translation text, no face:
/// `3.b text`, `3.b1 text`. The sub-unit's own dot is anchor enough.
pub fn sub_line(text: &str) -> Option<Candidate> {
    let (id, _) = bare(text)?;
    if id.sub.is_none() {
        return None;
    }
    Some(Candidate {
        face: None,
        line_id: id,
        method: MatchMethod::SubLine,
        confidence: CONF_SUB_LINE,
    })
}

/// Bare interpolated identifier, no face: `3' text`. The prime marker is
/// anchor enough.
pub fn bare_prime_line(text: &str) -> Option<Candidate> {
    let (id, _) = bare(text)?;
    if !id.prime || id.sub.is_some() {
        return None;
    }
    Some(Candidate {
        face: None,
        line_id: id,
        method: MatchMethod::BarePrimeLine,
        confidence: CONF_BARE_PRIME_LINE,
    })
}

/// Resolve a candidate against the artifact's lines by exact identifier
/// equality. Face-qualified candidates search only their face; bare
/// candidates must resolve uniquely; line numbers legitimately coincide
/// across faces, and guessing between them is how false matches happen.
pub fn resolve<'a>(
    candidate: &Candidate,
    lines: &'a [StructuralLine],
) -> Option<&'a StructuralLine> {
    match candidate.face {
        Some(face) => lines
            .iter()
            .find(|l| l.face == Some(face) && l.line_id == candidate.line_id && l.is_content()),
        None => {
            let mut hits = lines
                .iter()
                .filter(|l| l.line_id == candidate.line_id && l.is_content());
            let first = hits.next()?;
            if hits.next().is_some() {
                None
            } else {
                Some(first)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Leading-notation parsing
// ---------------------------------------------------------------------------

struct FaceNotation {
    face: Face,
    id: LineId,
}

/// `face [column] id …`: an optional roman-numeral column token between the
/// face and the identifier is skipped (`obv. ii 3`).
fn face_first(text: &str) -> Option<FaceNotation> {
    let mut tokens = text.split_whitespace();
    let face = Face::from_alias(tokens.next()?)?;
    let mut next = tokens.next()?;
    if parse_roman(&next.trim_end_matches('.').to_ascii_lowercase()).is_some() {
        next = tokens.next()?;
    }
    let (id, _) = parse_id_token(next)?;
    Some(FaceNotation { face, id })
}

/// `id' face …`: number-first declaration order, prime required.
fn prime_then_face(text: &str) -> Option<FaceNotation> {
    let mut tokens = text.split_whitespace();
    let (id, _) = parse_id_token(tokens.next()?)?;
    if !id.prime {
        return None;
    }
    let face = Face::from_alias(tokens.next()?)?;
    Some(FaceNotation { face, id })
}

/// Identifier with no face: optionally introduced by a line marker
/// (`l. 3`, `line 3`), which counts as an anchor.
fn bare(text: &str) -> Option<(LineId, bool)> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    if Face::from_alias(first).is_some() {
        return None;
    }
    if is_line_marker(first) {
        let (id, _) = parse_id_token(tokens.next()?)?;
        return Some((id, true));
    }
    let (id, anchored) = parse_id_token(first)?;
    // `3' o …` is the number-then-face declaration order, owned by the
    // face-qualified recognizer.
    if id.prime && tokens.next().and_then(Face::from_alias).is_some() {
        return None;
    }
    Some((id, anchored))
}

fn is_line_marker(token: &str) -> bool {
    matches!(
        token.trim_end_matches('.').to_ascii_lowercase().as_str(),
        "l" | "ln" | "li" | "line"
    )
}

/// Parse one whitespace token as a line identifier. Returns the identifier
/// and whether the token carried an anchor (surrounding parentheses or a
/// trailing separator). The token must be consumed entirely; `22nd` is not
/// an identifier.
fn parse_id_token(token: &str) -> Option<(LineId, bool)> {
    let mut anchored = false;
    let mut s = token;

    if let Some(inner) = s.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        s = inner;
        anchored = true;
    } else if let Some(stripped) = s.strip_suffix([':', '.', ',']) {
        s = stripped;
        anchored = true;
    }

    let id = parse_id_core(s)?;
    Some((id, anchored))
}

fn parse_id_core(s: &str) -> Option<LineId> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    let primary: u32 = s[..digits_end].parse().ok()?;

    let mut rest = &s[digits_end..];
    let mut prime = false;
    for marker in ["'", "\u{2032}", "\u{2019}"] {
        if let Some(r) = rest.strip_prefix(marker) {
            rest = r;
            prime = true;
            break;
        }
    }

    if rest.is_empty() {
        return Some(LineId { primary, prime, sub: None });
    }

    // Sub-unit, with or without the joining dot: `3.b1` or `3b`.
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    let letter = rest.chars().next()?;
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let tail = &rest[letter.len_utf8()..];
    let counter = if tail.is_empty() {
        None
    } else {
        Some(tail.parse().ok()?)
    };
    Some(LineId {
        primary,
        prime,
        sub: Some(SubUnit { letter, counter }),
    })
}
