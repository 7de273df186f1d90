//! Rule compilation module
//!
//! This module turns rule strings like "age > 30 AND department = Sales"
//! into AST nodes, with a global cache for repeated compilations.

pub mod cache;
mod compiler;
mod parser;


pub use cache::*;
pub use compiler::*;
pub use parser::*;
