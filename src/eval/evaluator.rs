//! Rule evaluator
//!
//! Walks a compiled tree against an attribute record. Both sides of an
//! AND/OR are always evaluated, left before right; there is no boolean
//! short-circuit, so a failing or side-effecting right-hand operand runs
//! even when the left side already decides the result.

use crate::ast::{Connective, Node, NodeKind, NodePayload};
use crate::error::{Result, RuleError};
use crate::eval::functions::FunctionRegistry;
use crate::eval::record::{Record, RecordValue};

/// Evaluate a compiled rule tree against a record
pub fn evaluate(node: &Node, record: &Record, functions: &FunctionRegistry) -> Result<bool> {
    match node.kind() {
        NodeKind::Operand => evaluate_operand(node, record, functions),
        NodeKind::Operator => evaluate_operator(node, record, functions),
    }
}

fn evaluate_operand(node: &Node, record: &Record, functions: &FunctionRegistry) -> Result<bool> {
    let payload = node.payload().ok_or_else(|| {
        RuleError::Validation("operand node has no payload".to_string())
    })?;

    match payload {
        NodePayload::Comparison {
            attribute,
            operator,
            literal,
        } => evaluate_comparison(attribute, operator, literal, record),
        NodePayload::Function { name, args } => {
            let function = functions
                .resolve(name)
                .ok_or_else(|| RuleError::UndefinedFunction(name.clone()))?;
            function(args)
        }
        NodePayload::Connective(_) => Err(RuleError::Validation(
            "operand node carries a connective payload".to_string(),
        )),
    }
}

fn evaluate_comparison(
    attribute: &str,
    operator: &str,
    literal: &str,
    record: &Record,
) -> Result<bool> {
    let value = record
        .get(attribute)
        .ok_or_else(|| RuleError::MissingAttribute(attribute.to_string()))?;

    match operator {
        ">" => Ok(numeric_value(value)? > numeric_literal(literal)?),
        "<" => Ok(numeric_value(value)? < numeric_literal(literal)?),
        // String-cast equality: the record value's canonical string form
        // against the raw literal. "30" and "30.00" do not match.
        "=" => Ok(value.to_string() == literal),
        other => Err(RuleError::InvalidOperator(other.to_string())),
    }
}

fn numeric_value(value: &RecordValue) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| RuleError::NotNumeric(value.to_string()))
}

fn numeric_literal(literal: &str) -> Result<f64> {
    literal
        .parse::<f64>()
        .map_err(|_| RuleError::NotNumeric(literal.to_string()))
}

fn evaluate_operator(node: &Node, record: &Record, functions: &FunctionRegistry) -> Result<bool> {
    let connective = match node.payload() {
        Some(NodePayload::Connective(c)) => *c,
        Some(other) => {
            return Err(RuleError::InvalidConnective(format!("{:?}", other)));
        }
        None => return Err(RuleError::InvalidConnective("none".to_string())),
    };

    // Reachable only through a failed no-rollback modify; fail instead of
    // treating the tree as well-formed.
    let left = node.left().ok_or_else(|| {
        RuleError::Validation("operator node missing left child".to_string())
    })?;
    let right = node.right().ok_or_else(|| {
        RuleError::Validation("operator node missing right child".to_string())
    })?;

    let left_result = evaluate(left, record, functions)?;
    let right_result = evaluate(right, record, functions)?;

    Ok(match connective {
        Connective::And => left_result && right_result,
        Connective::Or => left_result || right_result,
    })
}
