//! Recorded diagnostics and the entry builder callers hand to the bundle

use serde::Serialize;

use super::Severity;
use crate::context::ContextProvider;

/// Longer-form explanation attached to a diagnostic.
///
/// Stored exactly as supplied; the text renderer is the only place lines are
/// joined for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Description {
    /// A single block of text
    Text(String),
    /// An ordered sequence of display lines
    Lines(Vec<String>),
}

/// Location attribution for a diagnostic.
///
/// Diagnostics recorded at the top level carry a bare leaf file name (an
/// empty string when none was given). Diagnostics recorded inside one or
/// more labeled scopes carry the chain of scope labels followed by the leaf,
/// attributing the diagnostic to its enclosing containers. The structured
/// output contract depends on the scalar-vs-list distinction, so the two
/// shapes serialize untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileRef {
    /// Leaf file name at top level, `""` when no file was given
    Scalar(String),
    /// `[scope labels..., leaf]` inside nested containers
    Nested(Vec<String>),
}

impl FileRef {
    /// Breadcrumb form used by the text renderer: labels joined by `" > "`
    /// with the leaf appended.
    pub fn display(&self) -> String {
        match self {
            FileRef::Scalar(leaf) => leaf.clone(),
            FileRef::Nested(parts) => parts.join(" > "),
        }
    }
}

/// One recorded diagnostic.
///
/// `file` is composed from the active scope breadcrumb at record time and is
/// immutable afterwards; later scope pushes and pops never rewrite history.
/// `line` is present iff the caller supplied one (strictly positive);
/// `column` is present iff the caller supplied one (zero is a valid column).
/// Field order matches the structured output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    pub description: Option<Description>,
    pub file: FileRef,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub context: Option<Vec<String>>,
    pub id: Vec<String>,
}

/// Builder for one diagnostic, passed to [`DiagnosticBundle::error`],
/// [`DiagnosticBundle::warning`] or [`DiagnosticBundle::notice`].
///
/// The `id` path is the caller's hierarchical classification of the message
/// (used downstream for grouping; may be empty). Everything else defaults to
/// absent. Context lines can be supplied literally with [`with_context`] or
/// resolved from a [`ContextProvider`] at record time with
/// [`with_context_from`] when both a line and a column are present.
///
/// [`DiagnosticBundle::error`]: crate::bundle::DiagnosticBundle::error
/// [`DiagnosticBundle::warning`]: crate::bundle::DiagnosticBundle::warning
/// [`DiagnosticBundle::notice`]: crate::bundle::DiagnosticBundle::notice
/// [`with_context`]: Entry::with_context
/// [`with_context_from`]: Entry::with_context_from
pub struct Entry<'a> {
    pub(crate) id: Vec<String>,
    pub(crate) message: String,
    pub(crate) description: Option<Description>,
    pub(crate) file: Option<String>,
    pub(crate) line: Option<usize>,
    pub(crate) column: Option<usize>,
    pub(crate) context: Option<Vec<String>>,
    pub(crate) provider: Option<&'a dyn ContextProvider>,
}

impl<'a> Entry<'a> {
    pub fn new(id: &[&str], message: impl Into<String>) -> Self {
        Self {
            id: id.iter().map(|part| part.to_string()).collect(),
            message: message.into(),
            description: None,
            file: None,
            line: None,
            column: None,
            context: None,
            provider: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Description::Text(description.into()));
        self
    }

    pub fn with_description_lines<S: Into<String>>(
        mut self,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        self.description = Some(Description::Lines(
            lines.into_iter().map(|line| line.into()).collect(),
        ));
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Supply the surrounding source lines literally.
    pub fn with_context<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.context = Some(lines.into_iter().map(|line| line.into()).collect());
        self
    }

    /// Resolve context from `provider` at record time. Consulted only when
    /// no literal context was supplied and both line and column are present.
    pub fn with_context_from(mut self, provider: &'a dyn ContextProvider) -> Self {
        self.provider = Some(provider);
        self
    }
}
