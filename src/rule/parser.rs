//! Condition string parser
//!
//! Parses a single comparison like `age > 30` into an operand node. The
//! grammar is deliberately small: an identifier, a run of relational operator
//! characters, and a literal token kept as a raw string. Numeric coercion of
//! the literal happens at evaluation time, not here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{FunctionArgs, Node};
use crate::catalog;
use crate::error::{Result, RuleError};

// Anchored at the start only: trailing text after the literal is ignored.
// The operator class is greedy, so `>=` or `==` scan fine and are only
// rejected when the tree is evaluated.
static CONDITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s*([<>=]+)\s*(\S+)").expect("condition pattern is valid"));

// Function-call form: `name(arg1,arg2)`. No nested parentheses.
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\(([^)]*)\)").expect("function pattern is valid"));

/// Parse a single comparison condition into an operand node
pub fn parse_condition(condition: &str) -> Result<Node> {
    let caps = CONDITION_RE
        .captures(condition)
        .ok_or_else(|| RuleError::MalformedCondition(condition.to_string()))?;

    let attribute = &caps[1];
    catalog::validate_attribute(attribute)?;

    Ok(Node::comparison(attribute, &caps[2], &caps[3]))
}

/// Parse a condition that may be a function call.
///
/// Recognizes `name(arg1,arg2,...)` and produces a function operand; the
/// arguments are the comma-split raw substrings, untrimmed. Anything that
/// does not match the call form falls back to the plain comparison grammar.
pub fn parse_function_condition(condition: &str) -> Result<Node> {
    match FUNCTION_RE.captures(condition) {
        Some(caps) => {
            let args: FunctionArgs = caps[2].split(',').map(str::to_string).collect();
            Ok(Node::function(&caps[1], args))
        }
        None => parse_condition(condition),
    }
}
