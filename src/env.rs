// ABOUTME: Per-invocation variable environment with implicit-zero reads

use std::collections::HashMap;

/// A flat mapping from variable names to integers, one per function
/// invocation. Predicate blocks group statements at parse time only and do
/// not open nested scopes at runtime, so there is no parent chain.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Reads a variable. A name not yet present is defined as 0 at the
    /// moment of first reference, and 0 is returned.
    pub fn fetch(&mut self, name: &str) -> i64 {
        if let Some(&value) = self.bindings.get(name) {
            return value;
        }
        self.bindings.insert(name.to_string(), 0);
        0
    }

    /// Binds `name` to `value`, creating or overwriting as needed.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.bindings.insert(name.to_string(), value);
    }

    /// True iff `name` has been defined in this invocation.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}
