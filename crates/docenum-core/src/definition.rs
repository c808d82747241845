//! Enumerations declared as data.
//!
//! An [`EnumDefinition`] is the serializable form of a builder call: a name,
//! the [`EnumConfig`] settings and the ordered declarations. It loads from
//! TOML:
//!
//! ```toml
//! name = "ClientSideError"
//! initial_number = 400
//!
//! [field_names]
//! doc = "msg"
//!
//! [[items]]
//! name = "BadRequest"
//! args = ["bad request"]
//!
//! [[items]]
//! name = "RequestTimeout"
//! args = [409, "request timeout"]
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::builder::{Declaration, DocEnumBuilder};
use crate::config::EnumConfig;
use crate::error::{Error, Result};
use crate::table::DocEnum;

/// A complete enumeration declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Enumeration name.
    pub name: String,

    /// Numbering and export settings.
    #[serde(flatten)]
    pub config: EnumConfig,

    /// Items in declaration order.
    #[serde(default)]
    pub items: Vec<Declaration>,
}

impl EnumDefinition {
    /// Parse a definition from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::parse(e.to_string()))
    }

    /// Read and parse a definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading enumeration definition from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Serialize this definition to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::parse(e.to_string()))
    }

    /// A builder primed with this definition.
    pub fn into_builder(self) -> DocEnumBuilder {
        DocEnum::builder(self.name)
            .config(self.config)
            .declarations(self.items)
    }

    /// Build the enumeration.
    pub fn build(self) -> Result<DocEnum> {
        self.into_builder().build()
    }
}
