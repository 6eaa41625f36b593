//! Detected package type registry

use std::collections::HashMap;

/// A detected package type: a small integer code with a canonical name.
#[derive(Debug, Clone, Copy)]
pub struct DetectedType {
    pub code: u32,
    pub name: &'static str,
}

/// Default table of package types recognized by the validation pipeline.
pub const PACKAGE_TYPES: &[DetectedType] = &[
    DetectedType {
        code: 1,
        name: "extension",
    },
    DetectedType {
        code: 2,
        name: "theme",
    },
    DetectedType {
        code: 3,
        name: "dictionary",
    },
    DetectedType {
        code: 4,
        name: "langpack",
    },
    DetectedType {
        code: 5,
        name: "search",
    },
];

/// Maps detected-type codes to canonical names.
///
/// The table is configuration, not engine logic: [`Default`] loads
/// [`PACKAGE_TYPES`], and pipelines with their own enumeration can build a
/// registry from scratch. Codes absent from the table still round-trip
/// numerically through the bundle; they simply have no canonical name.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    names: HashMap<u32, String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let names = PACKAGE_TYPES
            .iter()
            .map(|ty| (ty.code, ty.name.to_string()))
            .collect();
        Self { names }
    }
}

impl TypeRegistry {
    /// An empty registry; every lookup misses until types are added.
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    pub fn with_type(mut self, code: u32, name: impl Into<String>) -> Self {
        self.names.insert(code, name.into());
        self
    }

    pub fn name(&self, code: u32) -> Option<&str> {
        self.names.get(&code).map(|name| name.as_str())
    }
}
