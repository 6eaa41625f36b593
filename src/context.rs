//! Surrounding-source-text capability
//!
//! Validation rules often know only a line and column; the engine fills in
//! the nearby source text for display through this capability. The engine
//! never reads files itself, so the provider is the boundary where source
//! text enters the system.

/// Extracts the source lines surrounding a location.
///
/// Returns the target line plus its immediate neighbors (up to 3 lines), or
/// `None` when the location is out of range. Consulted only when a
/// diagnostic was recorded with a line and a column but no literal context.
pub trait ContextProvider {
    fn surrounding(&self, line: usize, column: usize) -> Option<Vec<String>>;
}

/// Reference [`ContextProvider`] over an in-memory source string.
#[derive(Debug, Clone)]
pub struct SourceContext {
    lines: Vec<String>,
}

impl SourceContext {
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(|line| line.to_string()).collect(),
        }
    }
}

impl ContextProvider for SourceContext {
    fn surrounding(&self, line: usize, _column: usize) -> Option<Vec<String>> {
        // Lines are 1-indexed; 0 and past-the-end are out of range.
        if line == 0 || line > self.lines.len() {
            return None;
        }
        let target = line - 1;
        let start = target.saturating_sub(1);
        let end = (target + 2).min(self.lines.len());
        Some(self.lines[start..end].to_vec())
    }
}
