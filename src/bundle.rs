//! The diagnostic bundle: the state machine validation rules record into

use serde_json::Value;
use tracing::{debug, trace};

use crate::rendering::{ResultsDocument, render_summary};
use crate::scope::{ScopeStack, StateError};
use crate::types::{Entry, FileRef, Message, Severity, TypeRegistry};

/// Per-severity totals over the recorded messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageCounts {
    pub errors: usize,
    pub warnings: usize,
    pub notices: usize,
}

impl MessageCounts {
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.notices
    }
}

/// Accumulates diagnostics for one validation run.
///
/// Rules record errors, warnings and notices against the bundle while the
/// pipeline moves through tiers and descends into nested containers; the
/// bundle stamps each message with the scope breadcrumb active at record
/// time and tracks the furthest tier reached. Rendering reads a snapshot and
/// never mutates, so it can run mid-stream for progressive reporting as well
/// as at the end.
///
/// The two construction flags, `determined` and `listed`, are seeded into
/// the persistent resource mapping under the same keys for rules to consult;
/// the engine itself never branches on them.
#[derive(Debug)]
pub struct DiagnosticBundle {
    messages: Vec<Message>,
    scopes: ScopeStack,
    types: TypeRegistry,
    tier: usize,
    ending_tier: usize,
    detected_type: Option<u32>,
    determined: bool,
    listed: bool,
}

impl Default for DiagnosticBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticBundle {
    pub fn new() -> Self {
        let mut bundle = Self {
            messages: Vec::new(),
            scopes: ScopeStack::new(),
            types: TypeRegistry::default(),
            tier: 1,
            ending_tier: 1,
            detected_type: None,
            determined: true,
            listed: true,
        };
        bundle.seed_flags();
        bundle
    }

    pub fn with_determined(mut self, determined: bool) -> Self {
        self.determined = determined;
        self.seed_flags();
        self
    }

    pub fn with_listed(mut self, listed: bool) -> Self {
        self.listed = listed;
        self.seed_flags();
        self
    }

    /// Replace the detected-type table. The default table covers the stock
    /// pipeline; embedders with their own enumeration inject it here.
    pub fn with_types(mut self, types: TypeRegistry) -> Self {
        self.types = types;
        self
    }

    fn seed_flags(&mut self) {
        self.scopes
            .save("determined", Value::Bool(self.determined), false);
        self.scopes.save("listed", Value::Bool(self.listed), false);
    }

    // ── recording ───────────────────────────────────────────────────

    pub fn error(&mut self, entry: Entry<'_>) {
        self.record(Severity::Error, entry);
    }

    pub fn warning(&mut self, entry: Entry<'_>) {
        self.record(Severity::Warning, entry);
    }

    pub fn notice(&mut self, entry: Entry<'_>) {
        self.record(Severity::Notice, entry);
    }

    fn record(&mut self, severity: Severity, entry: Entry<'_>) {
        let Entry {
            id,
            message,
            description,
            file,
            line,
            column,
            context,
            provider,
        } = entry;

        let context = context.or_else(|| match (line, column, provider) {
            (Some(line), Some(column), Some(provider)) => provider.surrounding(line, column),
            _ => None,
        });

        let file = self.compose_file(file.as_deref());
        trace!(severity = severity.label(), text = %message, "record diagnostic");
        self.messages.push(Message {
            severity,
            message,
            description,
            file,
            line,
            column,
            context,
            id,
        });
    }

    /// Stamp the location breadcrumb for a message recorded now. Top-level
    /// diagnostics keep a scalar leaf; inside labeled scopes the leaf is
    /// appended to the label chain.
    fn compose_file(&self, leaf: Option<&str>) -> FileRef {
        let leaf = leaf.unwrap_or_default().to_string();
        let mut parts = self.scopes.breadcrumb();
        if parts.is_empty() {
            FileRef::Scalar(leaf)
        } else {
            parts.push(leaf);
            FileRef::Nested(parts)
        }
    }

    // ── run progression ─────────────────────────────────────────────

    /// Record the detected package type; the last call wins. The raw code is
    /// kept even when the registry has no name for it.
    pub fn set_type(&mut self, code: u32) {
        debug!(code, "set detected type");
        self.detected_type = Some(code);
    }

    /// Move to tier `n`. Tiers are not required to be monotonic (a late
    /// completeness pass may re-run a lower tier), so the furthest tier
    /// reached is tracked separately and is what renderings expose.
    pub fn set_tier(&mut self, tier: usize) {
        debug!(tier, "set tier");
        self.tier = tier;
        self.ending_tier = self.ending_tier.max(tier);
    }

    // ── scopes and resources ────────────────────────────────────────

    pub fn push_state(&mut self, label: Option<&str>) {
        self.scopes.push(label);
    }

    pub fn pop_state(&mut self) -> Result<(), StateError> {
        self.scopes.pop()
    }

    /// Run `f` inside a pushed scope with a guaranteed matching pop, so an
    /// early `?` return in a validation rule cannot unbalance the stack.
    pub fn scoped<T, E, F>(&mut self, label: Option<&str>, f: F) -> Result<T, E>
    where
        E: From<StateError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.push_state(label);
        let result = f(self);
        self.pop_state()?;
        result
    }

    pub fn save_resource(&mut self, key: impl Into<String>, value: Value) {
        self.scopes.save(key, value, false);
    }

    pub fn save_pushable_resource(&mut self, key: impl Into<String>, value: Value) {
        self.scopes.save(key, value, true);
    }

    pub fn get_resource(&self, key: &str) -> Option<&Value> {
        self.scopes.get(key)
    }

    // ── querying ────────────────────────────────────────────────────

    /// Whether validation failed: any error, or with `strict` any error or
    /// warning. Notices never fail a run.
    pub fn failed(&self, strict: bool) -> bool {
        self.messages.iter().any(|message| {
            message.severity == Severity::Error
                || (strict && message.severity == Severity::Warning)
        })
    }

    /// Recorded messages in recording order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn counts(&self) -> MessageCounts {
        let mut counts = MessageCounts::default();
        for message in &self.messages {
            match message.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Notice => counts.notices += 1,
            }
        }
        counts
    }

    pub fn tier(&self) -> usize {
        self.tier
    }

    /// The highest tier ever set: how far validation got.
    pub fn ending_tier(&self) -> usize {
        self.ending_tier
    }

    /// The raw detected-type code, registry-known or not.
    pub fn detected_type(&self) -> Option<u32> {
        self.detected_type
    }

    /// Canonical name of the detected type, when the registry knows it.
    pub fn detected_type_name(&self) -> Option<&str> {
        self.detected_type.and_then(|code| self.types.name(code))
    }

    pub fn determined(&self) -> bool {
        self.determined
    }

    pub fn listed(&self) -> bool {
        self.listed
    }

    pub fn depth(&self) -> usize {
        self.scopes.depth()
    }

    // ── rendering ───────────────────────────────────────────────────

    /// Structured snapshot of the current state. Idempotent; may be called
    /// before recording has finished.
    pub fn render(&self) -> ResultsDocument<'_> {
        ResultsDocument {
            detected_type: self.detected_type_name(),
            success: !self.failed(false),
            ending_tier: self.ending_tier,
            messages: &self.messages,
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.render())
    }

    /// Human-readable summary. `verbose` adds each message's description and
    /// location breadcrumb; `use_color` threads the ANSI palette explicitly.
    pub fn summary(&self, verbose: bool, use_color: bool) -> String {
        render_summary(self, verbose, use_color)
    }
}
