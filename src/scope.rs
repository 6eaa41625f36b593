//! Nested validation scopes and scope-aware resource state
//!
//! Entering a sub-archive or sub-resource pushes a scope frame; leaving pops
//! it. Frames do two jobs: labeled frames contribute to the location
//! breadcrumb stamped on diagnostics, and every frame (labeled or anonymous)
//! isolates the pushable resource mapping so values shared between rules at
//! one nesting level never leak into another.

use std::collections::HashMap;
use std::mem;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Programming errors in scope handling. Callers must balance push/pop;
/// an imbalance is surfaced immediately rather than tolerated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("scope stack underflow: pop_state called with no active scope")]
    ScopeUnderflow,
}

/// One entered scope: the label given at push time (if any) and the pushable
/// mapping of the level that was active before the push, restored on pop.
#[derive(Debug)]
struct ScopeFrame {
    label: Option<String>,
    outer_pushable: HashMap<String, Value>,
}

/// The scope stack and its two-tier resource store.
///
/// Resources live either in the persistent base mapping (visible for the
/// owning bundle's entire lifetime) or in the pushable mapping of the
/// current nesting level. A push parks the current pushable mapping inside
/// the new frame and starts an empty one; the matching pop discards whatever
/// the scope accumulated and restores the parked mapping, original values
/// intact.
#[derive(Debug, Default)]
pub struct ScopeStack {
    base: HashMap<String, Value>,
    pushable: HashMap<String, Value>,
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a scope. Anonymous frames (`label` = `None`) isolate resources
    /// but contribute nothing to the breadcrumb.
    pub fn push(&mut self, label: Option<&str>) {
        debug!(label, depth = self.frames.len() + 1, "push scope");
        self.frames.push(ScopeFrame {
            label: label.map(|label| label.to_string()),
            outer_pushable: mem::take(&mut self.pushable),
        });
    }

    /// Leave the innermost scope, discarding its pushable resources.
    pub fn pop(&mut self) -> Result<(), StateError> {
        let frame = self.frames.pop().ok_or(StateError::ScopeUnderflow)?;
        debug!(label = frame.label.as_deref(), depth = self.frames.len(), "pop scope");
        self.pushable = frame.outer_pushable;
        Ok(())
    }

    /// Labels of the active frames, outermost first. Anonymous frames are
    /// skipped.
    pub fn breadcrumb(&self) -> Vec<String> {
        self.frames
            .iter()
            .filter_map(|frame| frame.label.clone())
            .collect()
    }

    /// Current nesting depth (0 = top level).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Write a resource. Pushable writes land in the current level's
    /// pushable mapping and vanish when the level is exited; persistent
    /// writes land in the base mapping.
    pub fn save(&mut self, key: impl Into<String>, value: Value, pushable: bool) {
        let key = key.into();
        if pushable {
            self.pushable.insert(key, value);
        } else {
            self.base.insert(key, value);
        }
    }

    /// Look up a resource: the current level's pushable mapping first, then
    /// the base mapping. A miss is a normal negative lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pushable.get(key).or_else(|| self.base.get(key))
    }
}
