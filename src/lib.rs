//! Diagnostic aggregation core for package-validation pipelines.
//!
//! Validation rules run across tiers and record typed diagnostics against a
//! shared [`DiagnosticBundle`], which tracks nested container scopes,
//! scope-aware resource state, and tier progression, and renders both a
//! machine-readable results document and a human-readable summary.

pub mod bundle;
pub mod context;
pub mod rendering;
pub mod scope;
pub mod types;

pub use bundle::{DiagnosticBundle, MessageCounts};
pub use context::{ContextProvider, SourceContext};
pub use rendering::{Colors, ResultsDocument, render_summary, strip_ansi};
pub use scope::{ScopeStack, StateError};
pub use types::{
    Description, DetectedType, Entry, FileRef, Message, PACKAGE_TYPES, Severity, TypeRegistry,
};
