//! In-place structural edits on compiled rule trees
//!
//! Every edit re-runs the node invariant check after applying its changes.
//! `modify` deliberately does NOT roll back on a failed check: the node is
//! left in the mutated, invalid state and the caller decides how to recover.

use serde::{Deserialize, Serialize};

use crate::ast::node::{Node, NodeKind, NodePayload};
use crate::error::{Result, RuleError};

/// Which child slot of an operator node an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Node {
    /// Overwrite the kind and/or payload of this node, then re-validate.
    ///
    /// No rollback on failure: if the new combination violates the node
    /// invariants, the error is returned and the node keeps the mutated
    /// state. Callers that need the old node must clone it first.
    pub fn modify(&mut self, new_kind: Option<NodeKind>, new_payload: Option<NodePayload>) -> Result<()> {
        if let Some(kind) = new_kind {
            self.kind = kind;
        }
        if let Some(payload) = new_payload {
            self.payload = Some(payload);
        }
        self.validate()
    }

    /// Move `child` into the given child slot, dropping any subtree that was
    /// there, then re-validate this node.
    ///
    /// Only operator nodes own children; attaching to an operand fails before
    /// any mutation takes place. Taking the child by value keeps ownership
    /// exclusive: a subtree can never end up shared between two parents.
    pub fn attach(&mut self, child: Node, side: Side) -> Result<()> {
        if self.kind != NodeKind::Operator {
            return Err(RuleError::Validation(
                "cannot attach a child to an operand node".to_string(),
            ));
        }
        match side {
            Side::Left => self.left = Some(Box::new(child)),
            Side::Right => self.right = Some(Box::new(child)),
        }
        self.validate()
    }
}
