//! Error types for the rule engine core

use thiserror::Error;

/// Main error type for the rule engine core
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Invalid condition format: {0}")]
    MalformedCondition(String),

    #[error("Missing attribute in record: {0}")]
    MissingAttribute(String),

    #[error("Value is not numeric: {0}")]
    NotNumeric(String),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Invalid connective: {0}")]
    InvalidConnective(String),

    #[error("Function not defined: {0}")]
    UndefinedFunction(String),

    #[error("Node validation failed: {0}")]
    Validation(String),

    #[error("Rule compilation failed: {0}")]
    Compile(Box<RuleError>),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl RuleError {
    /// Unwrap nested `Compile` wrappers down to the failure that caused them.
    pub fn root_cause(&self) -> &RuleError {
        match self {
            RuleError::Compile(inner) => inner.root_cause(),
            other => other,
        }
    }
}

/// Result type alias for the rule engine core
pub type Result<T> = std::result::Result<T, RuleError>;
