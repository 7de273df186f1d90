//! Attribute catalog for rule conditions
//!
//! The set of attributes a rule may reference is fixed at build time.
//! There is no runtime registration.

use crate::error::{Result, RuleError};

/// Permitted attribute names for comparison conditions
pub const VALID_ATTRIBUTES: [&str; 4] = ["age", "department", "salary", "experience"];

/// Check that an attribute name belongs to the catalog
pub fn validate_attribute(attribute: &str) -> Result<()> {
    if VALID_ATTRIBUTES.contains(&attribute) {
        Ok(())
    } else {
        Err(RuleError::InvalidAttribute(attribute.to_string()))
    }
}
