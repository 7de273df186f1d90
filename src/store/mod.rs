//! Rule serialization and the repository contract
//!
//! A compiled tree serializes to a self-describing JSON mapping with `kind`,
//! `left`, `right` and `payload` keys, so round-tripping through any
//! repository reproduces an identical tree. This crate does not pick a
//! storage backend; [`MemoryRepository`] is the in-process implementation
//! and doubles as the reference for the contract.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::ast::Node;
use crate::error::{Result, RuleError};

/// Serialize a compiled tree to its self-describing JSON form
pub fn encode(tree: &Node) -> Result<String> {
    serde_json::to_string(tree).map_err(|e| RuleError::Serialization(e.to_string()))
}

/// Deserialize a tree from its JSON form, re-validating every node.
///
/// Deserialization bypasses the validating constructors, so the whole tree
/// is checked before it is handed back.
pub fn decode(raw: &str) -> Result<Node> {
    let tree: Node =
        serde_json::from_str(raw).map_err(|e| RuleError::Deserialization(e.to_string()))?;
    tree.validate_tree()?;
    Ok(tree)
}

/// Named storage for compiled rules
pub trait RuleRepository {
    /// Store a tree under a name, replacing any existing entry
    fn save(&self, name: &str, tree: &Node) -> Result<()>;

    /// Load a tree by name; `None` when the name is unknown
    fn load(&self, name: &str) -> Result<Option<Node>>;

    /// Replace the tree under an existing name; unknown names are a no-op
    fn update(&self, name: &str, tree: &Node) -> Result<()>;

    /// Remove a named rule; unknown names are a no-op
    fn delete(&self, name: &str) -> Result<()>;
}

/// In-memory repository keyed by rule name.
///
/// Entries are held in encoded form, so every load exercises the same
/// decode-and-revalidate path an external store would.
#[derive(Default)]
pub struct MemoryRepository {
    rules: RwLock<AHashMap<String, String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

impl RuleRepository for MemoryRepository {
    fn save(&self, name: &str, tree: &Node) -> Result<()> {
        let encoded = encode(tree)?;
        self.rules.write().insert(name.to_string(), encoded);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Node>> {
        let encoded = {
            let rules = self.rules.read();
            rules.get(name).cloned()
        };
        match encoded {
            Some(raw) => Ok(Some(decode(&raw)?)),
            None => Ok(None),
        }
    }

    fn update(&self, name: &str, tree: &Node) -> Result<()> {
        let encoded = encode(tree)?;
        let mut rules = self.rules.write();
        if let Some(entry) = rules.get_mut(name) {
            *entry = encoded;
        }
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.rules.write().remove(name);
        Ok(())
    }
}
