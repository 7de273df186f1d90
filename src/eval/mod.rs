//! Rule evaluation module
//!
//! This module evaluates a compiled rule tree against an attribute record,
//! resolving function-backed operands through an injected registry.

mod evaluator;
mod functions;
mod record;

#[cfg(test)]
mod property_tests;

pub use evaluator::*;
pub use functions::*;
pub use record::*;
