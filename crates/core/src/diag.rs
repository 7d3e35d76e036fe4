use serde::{Deserialize, Serialize};

/// Non-fatal parse or classification warning, emitted alongside normal
/// output. Diagnostics never interrupt processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub artifact_id: String,
    /// 1-based input line number, when the warning is tied to one.
    pub line_no: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(artifact_id: impl Into<String>, line_no: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            line_no,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_no {
            Some(n) => write!(f, "{}:{}: {}", self.artifact_id, n, self.message),
            None => write!(f, "{}: {}", self.artifact_id, self.message),
        }
    }
}
