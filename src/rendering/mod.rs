//! Renderers over a bundle snapshot
//!
//! Two independent, stateless views of the same accumulated state: the
//! structured results document consumed by machines and the severity-grouped
//! text summary read by humans. Neither mutates the bundle, and both may be
//! rendered repeatedly while recording is still in progress.

mod colors;
mod structured;
mod summary;

pub use colors::{Colors, strip_ansi};
pub use structured::ResultsDocument;
pub use summary::render_summary;
