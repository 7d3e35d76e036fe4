use serde::{Deserialize, Serialize};

/// Canonical enumeration of the inscribed surfaces of an artifact.
///
/// Closed by design: a century of transliteration records spells these many
/// different ways, and the alias table below is the only door in. Novel
/// spellings are dropped with a diagnostic rather than silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
    Seal,
}

/// Historical spellings and abbreviations, normalized (lowercase, trailing
/// dot stripped) before lookup. Single letters follow the dominant field
/// convention: `o` = obverse, `r` = reverse, `s` = seal.
const ALIASES: &[(&str, Face)] = &[
    ("obverse", Face::Front),
    ("obv", Face::Front),
    ("o", Face::Front),
    ("front", Face::Front),
    ("face a", Face::Front),
    ("reverse", Face::Back),
    ("rev", Face::Back),
    ("r", Face::Back),
    ("back", Face::Back),
    ("face b", Face::Back),
    ("left", Face::LeftEdge),
    ("left edge", Face::LeftEdge),
    ("l.e", Face::LeftEdge),
    ("le", Face::LeftEdge),
    ("right", Face::RightEdge),
    ("right edge", Face::RightEdge),
    ("r.e", Face::RightEdge),
    ("re", Face::RightEdge),
    ("top", Face::TopEdge),
    ("top edge", Face::TopEdge),
    ("upper edge", Face::TopEdge),
    ("u.e", Face::TopEdge),
    ("ue", Face::TopEdge),
    ("bottom", Face::BottomEdge),
    ("bottom edge", Face::BottomEdge),
    ("lower edge", Face::BottomEdge),
    ("lo.e", Face::BottomEdge),
    ("loe", Face::BottomEdge),
    ("seal", Face::Seal),
    ("seal impression", Face::Seal),
    ("sealing", Face::Seal),
    ("s", Face::Seal),
];

/// Designators for the physical object itself rather than one of its faces.
/// These carry no line content of their own and are recognized only so the
/// parser can ignore them without a spurious diagnostic.
const OBJECT_KINDS: &[&str] = &[
    "tablet", "envelope", "bulla", "object", "fragment", "prism", "cylinder", "cone", "brick",
];

impl Face {
    /// Resolve a face name or abbreviation to its canonical variant.
    pub fn from_alias(name: &str) -> Option<Face> {
        let key = normalize(name);
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, face)| *face)
    }

    /// True if `name` designates the physical object type, not a face.
    pub fn is_object_kind(name: &str) -> bool {
        let key = normalize(name);
        OBJECT_KINDS.contains(&key.as_str())
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
            Self::LeftEdge => write!(f, "left_edge"),
            Self::RightEdge => write!(f, "right_edge"),
            Self::TopEdge => write!(f, "top_edge"),
            Self::BottomEdge => write!(f, "bottom_edge"),
            Self::Seal => write!(f, "seal"),
        }
    }
}
