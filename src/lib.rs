//! Rule Engine Core - boolean eligibility rule compiler and evaluator
//!
//! This crate compiles rule strings like `"age > 30 AND department = Sales"`
//! into an AST, evaluates compiled trees against attribute records, supports
//! in-place structural edits that re-validate tree invariants, and serializes
//! trees for an external rule repository.
//!
//! # Example
//!
//! ```
//! use rule_engine_core::{compile, evaluate, FunctionRegistry, Record};
//!
//! let tree = compile("age > 30 AND department = Sales")?;
//!
//! let mut record = Record::default();
//! record.insert("age".to_string(), 35i64.into());
//! record.insert("department".to_string(), "Sales".into());
//!
//! let functions = FunctionRegistry::new();
//! assert!(evaluate(&tree, &record, &functions)?);
//! # Ok::<(), rule_engine_core::RuleError>(())
//! ```

pub mod ast;
pub mod catalog;
pub mod error;
pub mod eval;
pub mod rule;
pub mod store;

pub use ast::{Connective, FunctionArgs, Node, NodeKind, NodePayload, Side};
pub use error::{Result, RuleError};
pub use eval::{evaluate, record_from, FunctionRegistry, Record, RecordValue, RuleFn};
pub use rule::{
    combine, compile, evaluate_rule, get_or_compile, parse_condition, parse_function_condition,
};
pub use store::{decode, encode, MemoryRepository, RuleRepository};
