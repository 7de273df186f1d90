//! Rule compiler and combiner
//!
//! A rule string is split recursively on the boolean connectives and the
//! leaves are handed to the condition parser. The split is textual and
//! intentionally simple: only the exact substrings `" AND "` and `" OR "`
//! separate sub-rules, and `" AND "` is always tried first. A string that
//! contains both connectives therefore splits on AND regardless of written
//! order; this is a documented property of the grammar, not operator
//! precedence in the usual sense.

use crate::ast::{Connective, Node};
use crate::error::{Result, RuleError};
use crate::rule::parser::parse_condition;

const AND_SEPARATOR: &str = " AND ";
const OR_SEPARATOR: &str = " OR ";

/// Compile a rule string into an AST.
///
/// Any failure in a sub-rule aborts the whole compile; the innermost cause
/// is returned wrapped in [`RuleError::Compile`] and can be recovered with
/// [`RuleError::root_cause`].
pub fn compile(rule: &str) -> Result<Node> {
    compile_split(rule).map_err(|err| RuleError::Compile(Box::new(err)))
}

fn compile_split(rule: &str) -> Result<Node> {
    let rule = rule.trim();

    if let Some((left, right)) = rule.split_once(AND_SEPARATOR) {
        let left = compile_split(left)?;
        let right = compile_split(right)?;
        return Ok(Node::operator(Connective::And, left, right));
    }

    if let Some((left, right)) = rule.split_once(OR_SEPARATOR) {
        let left = compile_split(left)?;
        let right = compile_split(right)?;
        return Ok(Node::operator(Connective::Or, left, right));
    }

    parse_condition(rule)
}

/// Combine several rule strings into a single AST, folding left-to-right
/// under AND. An empty input yields `None` rather than an error; the first
/// compile failure aborts the whole combine.
pub fn combine<S: AsRef<str>>(rules: &[S]) -> Result<Option<Node>> {
    let mut combined: Option<Node> = None;
    for rule in rules {
        let ast = compile(rule.as_ref())?;
        combined = Some(match combined {
            None => ast,
            Some(acc) => Node::operator(Connective::And, acc, ast),
        });
    }
    Ok(combined)
}
