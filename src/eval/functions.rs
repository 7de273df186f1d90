//! User-defined predicate functions callable from rule operands
//!
//! The registry is an ordinary value passed to the evaluator, not ambient
//! global state, so tests and hosts can isolate their registrations. It is
//! not internally synchronized; hosts that share one across threads must
//! finish registering before evaluation starts.

use ahash::AHashMap;

use crate::error::Result;

/// Predicate signature for user-defined functions
pub type RuleFn = dyn Fn(&[String]) -> Result<bool> + Send + Sync;

/// Name-to-predicate table for function-backed operands
#[derive(Default)]
pub struct FunctionRegistry {
    functions: AHashMap<String, Box<RuleFn>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate under a name, silently replacing any previous
    /// registration under the same name.
    pub fn register<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[String]) -> Result<bool> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Box::new(function));
    }

    /// Look up a predicate by name
    pub fn resolve(&self, name: &str) -> Option<&RuleFn> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
