//! Rule compilation cache - Optimized with faster hashing

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::ast::Node;
use crate::error::Result;
use crate::eval::{evaluate, FunctionRegistry, Record};
use crate::rule::compiler;

/// Global rule cache with fast hashing (ahash)
static RULE_CACHE: Lazy<RwLock<AHashMap<String, Node>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(256);
    RwLock::new(map)
});

/// Get or compile a rule string, using cache for repeated rules
#[inline]
pub fn get_or_compile(rule: &str) -> Result<Node> {
    // Fast path: check read lock first
    {
        let cache = RULE_CACHE.read();
        if let Some(ast) = cache.get(rule) {
            return Ok(ast.clone());
        }
    }

    // Slow path: compile and cache
    let ast = compiler::compile(rule)?;

    {
        let mut cache = RULE_CACHE.write();
        cache.insert(rule.to_string(), ast.clone());
    }

    Ok(ast)
}

/// Evaluate a rule string against a record, using the cached AST.
/// An empty rule string evaluates to true.
#[inline]
pub fn evaluate_rule(rule: &str, record: &Record, functions: &FunctionRegistry) -> Result<bool> {
    if rule.is_empty() {
        return Ok(true);
    }

    let ast = get_or_compile(rule)?;
    evaluate(&ast, record, functions)
}

/// Clear the rule cache (useful for testing)
#[allow(dead_code)]
pub fn clear_cache() {
    let mut cache = RULE_CACHE.write();
    cache.clear();
}

/// Get cache statistics
#[allow(dead_code)]
pub fn cache_size() -> usize {
    let cache = RULE_CACHE.read();
    cache.len()
}
