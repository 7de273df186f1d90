//! Abstract Syntax Tree for compiled rules

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, RuleError};

/// Argument list for a function-backed operand
pub type FunctionArgs = SmallVec<[String; 4]>;

/// Node kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Internal node holding a boolean connective and two children
    Operator,
    /// Leaf node holding a comparison or a function call
    Operand,
}

/// Boolean connective at an operator node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
}

/// Payload carried by a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodePayload {
    /// Connective for an operator node
    Connective(Connective),
    /// Comparison triple for an operand node.
    ///
    /// The relational operator is kept as the raw scanned string: the condition
    /// grammar accepts any run of `<`, `>`, `=` lexically, and only `>`, `<` and
    /// `=` are given meaning at evaluation time.
    Comparison {
        attribute: String,
        operator: String,
        literal: String,
    },
    /// Function call for an operand node
    Function { name: String, args: FunctionArgs },
}

/// A single AST node.
///
/// Children are exclusively owned; replacing a child drops the old subtree.
/// Fields are private so the structural invariants can only be relaxed through
/// the editor operations, which re-validate after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
    pub(crate) payload: Option<NodePayload>,
}

impl Node {
    /// Build a node from raw parts, validating the structural invariants
    pub fn new(
        kind: NodeKind,
        left: Option<Node>,
        right: Option<Node>,
        payload: Option<NodePayload>,
    ) -> Result<Self> {
        let node = Node {
            kind,
            left: left.map(Box::new),
            right: right.map(Box::new),
            payload,
        };
        node.validate()?;
        Ok(node)
    }

    /// Build an operator node with both children present
    pub fn operator(connective: Connective, left: Node, right: Node) -> Self {
        Node {
            kind: NodeKind::Operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            payload: Some(NodePayload::Connective(connective)),
        }
    }

    /// Build an operand node from a payload
    pub fn operand(payload: NodePayload) -> Self {
        Node {
            kind: NodeKind::Operand,
            left: None,
            right: None,
            payload: Some(payload),
        }
    }

    /// Build a comparison operand
    pub fn comparison(attribute: &str, operator: &str, literal: &str) -> Self {
        Node::operand(NodePayload::Comparison {
            attribute: attribute.to_string(),
            operator: operator.to_string(),
            literal: literal.to_string(),
        })
    }

    /// Build a function-call operand
    pub fn function(name: &str, args: FunctionArgs) -> Self {
        Node::operand(NodePayload::Function {
            name: name.to_string(),
            args,
        })
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn payload(&self) -> Option<&NodePayload> {
        self.payload.as_ref()
    }

    /// Check the structural invariants of this node.
    ///
    /// Operator nodes must own both children; operand nodes must carry a
    /// payload and own no children.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            NodeKind::Operator => {
                if self.left.is_none() || self.right.is_none() {
                    return Err(RuleError::Validation(
                        "operator nodes must have both left and right children".to_string(),
                    ));
                }
            }
            NodeKind::Operand => {
                if self.payload.is_none() {
                    return Err(RuleError::Validation(
                        "operand nodes must have a payload".to_string(),
                    ));
                }
                if self.left.is_some() || self.right.is_some() {
                    return Err(RuleError::Validation(
                        "operand nodes must not have children".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate this node and every node reachable from it.
    ///
    /// Used after deserialization, where nodes are rebuilt without going
    /// through the validating constructors.
    pub fn validate_tree(&self) -> Result<()> {
        self.validate()?;
        if let Some(left) = &self.left {
            left.validate_tree()?;
        }
        if let Some(right) = &self.right {
            right.validate_tree()?;
        }
        Ok(())
    }
}
