//! Rule AST and structural editing
//!
//! A compiled rule is a tree of [`Node`]s: operator nodes carry an AND/OR
//! connective and own two children, operand nodes carry a comparison or a
//! function call.

mod editor;
mod node;

pub use editor::*;
pub use node::*;
