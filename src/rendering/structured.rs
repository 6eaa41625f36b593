//! Machine-readable results document
//!
//! The field names and shapes here are a contract with downstream consumers:
//! `detected_type` is the canonical name or null, `file` is a bare string at
//! top level but a breadcrumb list inside nested containers, and `messages`
//! preserves recording order exactly.

use serde::Serialize;

use crate::types::Message;

/// Serializable snapshot of a bundle's accumulated results.
///
/// Borrowed from the bundle, so rendering allocates nothing until the
/// document is actually serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsDocument<'a> {
    pub detected_type: Option<&'a str>,
    pub success: bool,
    pub ending_tier: usize,
    pub messages: &'a [Message],
}
