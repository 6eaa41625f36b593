//! Diagnostic severity levels

use serde::Serialize;

/// Severity level of a recorded diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error: the package fails validation
    Error,
    /// Warning: a problem that does not by itself fail validation
    Warning,
    /// Notice: informational output for the consumer
    Notice,
}

impl Severity {
    /// Lowercase label used in both renderings (`"error"`, `"warning"`, `"notice"`)
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
        }
    }

    /// Summary ordering: errors before warnings before notices
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Notice => 2,
        }
    }
}
