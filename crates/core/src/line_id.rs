use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered sub-unit of a line identifier: a letter plus an optional counter,
/// used by itemized administrative records (`3.b`, `3.b1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubUnit {
    pub letter: char,
    pub counter: Option<u32>,
}

/// Structured line identifier: primary number, optional interpolation
/// (prime) marker, optional sub-unit.
///
/// The prime marker is load-bearing: lines `3` and `3'` are distinct
/// physical lines, so it is carried as a field, never folded into a string.
/// Ordering is implemented once, here, and nowhere else. Persisted form is
/// the canonical string (`3'`, `3.b1`), kept human-legible while the
/// in-memory representation stays structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LineId {
    pub primary: u32,
    pub prime: bool,
    pub sub: Option<SubUnit>,
}

impl LineId {
    pub fn new(primary: u32) -> Self {
        Self { primary, prime: false, sub: None }
    }

    pub fn primed(primary: u32) -> Self {
        Self { primary, prime: true, sub: None }
    }

    pub fn with_sub(primary: u32, letter: char, counter: Option<u32>) -> Self {
        Self { primary, prime: false, sub: Some(SubUnit { letter, counter }) }
    }

    /// Rank of the identifier among siblings sharing a primary number:
    /// plain, then primed, then sub-lettered (`3 < 3' < 3.a`).
    fn rank(&self) -> u8 {
        if self.sub.is_some() {
            2
        } else if self.prime {
            1
        } else {
            0
        }
    }
}

impl Ord for LineId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| self.sub.cmp(&other.sub))
            .then_with(|| self.prime.cmp(&other.prime))
    }
}

impl PartialOrd for LineId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if self.prime {
            write!(f, "'")?;
        }
        if let Some(sub) = &self.sub {
            write!(f, ".{}", sub.letter)?;
            if let Some(counter) = sub.counter {
                write!(f, "{}", counter)?;
            }
        }
        Ok(())
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for LineId {
    type Error = ParseLineIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error parsing the canonical string form of a [`LineId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLineIdError(pub String);

impl fmt::Display for ParseLineIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid line identifier: {}", self.0)
    }
}

impl std::error::Error for ParseLineIdError {}

impl FromStr for LineId {
    type Err = ParseLineIdError;

    /// Parse the canonical serialized form: `3`, `3'`, `3.b`, `3.b1`, `3'.b1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLineIdError(s.to_string());

        let digits_end = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        if digits_end == 0 {
            return Err(err());
        }
        let primary: u32 = s[..digits_end].parse().map_err(|_| err())?;

        let mut rest = &s[digits_end..];
        let prime = if let Some(r) = rest.strip_prefix('\'') {
            rest = r;
            true
        } else {
            false
        };

        let sub = match rest.strip_prefix('.') {
            None if rest.is_empty() => None,
            None => return Err(err()),
            Some(tail) => {
                let mut chars = tail.chars();
                let letter = chars.next().ok_or_else(err)?;
                if !letter.is_ascii_lowercase() {
                    return Err(err());
                }
                let counter_str = &tail[letter.len_utf8()..];
                let counter = if counter_str.is_empty() {
                    None
                } else {
                    Some(counter_str.parse().map_err(|_| err())?)
                };
                Some(SubUnit { letter, counter })
            }
        };

        Ok(LineId { primary, prime, sub })
    }
}
