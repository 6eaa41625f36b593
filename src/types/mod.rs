//! Type definitions for the diagnostic bundle
//!
//! This module contains the core types recorded and rendered by the engine:
//! severity levels, recorded messages with their location breadcrumbs, the
//! entry builder, and the detected package type registry.

mod detected;
mod message;
mod severity;

pub use detected::{DetectedType, PACKAGE_TYPES, TypeRegistry};
pub use message::{Description, Entry, FileRef, Message};
pub use severity::Severity;
