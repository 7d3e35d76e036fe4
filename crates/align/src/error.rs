use std::fmt;

/// Engine errors. Configuration is the only fatal class: a bad threshold
/// invalidates every subsequent decision, so it halts at startup. Malformed
/// artifact content never produces an error, only degraded outcomes.
#[derive(Debug)]
pub enum AlignError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Threshold validation error.
    ConfigValidation(String),
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for AlignError {}
