//! Per-enumeration settings.
//!
//! [`EnumConfig`] holds the two knobs an enumeration can override: where
//! auto-numbering starts, and which keys [`Member::to_dict`](crate::Member::to_dict)
//! exports under. Both deserialize with defaults, so a TOML definition only
//! names what it changes.

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// Default first value for auto-numbered items.
pub const DEFAULT_INITIAL_NUMBER: i64 = 1;

// ============================================================================
// Configuration structs
// ============================================================================

/// Keys used when exporting a member as a dict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Key for the member name.
    pub name: String,
    /// Key for the member value.
    pub value: String,
    /// Key for the member description.
    pub doc: String,
}

/// Settings applied while building one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumConfig {
    /// Value given to the first auto-numbered item.
    pub initial_number: i64,
    /// Export key names.
    pub field_names: FieldNames,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            value: "value".to_string(),
            doc: "doc".to_string(),
        }
    }
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            initial_number: DEFAULT_INITIAL_NUMBER,
            field_names: FieldNames::default(),
        }
    }
}

impl FieldNames {
    /// Create a set of export keys.
    pub fn new(name: impl Into<String>, value: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: doc.into(),
        }
    }

    /// Check that the three keys are distinct.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.name == self.value || self.name == self.doc {
            return Err(DefinitionError::ConflictingFieldNames {
                key: self.name.clone(),
            });
        }
        if self.value == self.doc {
            return Err(DefinitionError::ConflictingFieldNames {
                key: self.value.clone(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
