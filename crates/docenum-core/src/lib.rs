//! Docenum Core — self-numbering, self-documenting enumerations.
//!
//! An enumeration here is a table of named items, each carrying a value and a
//! human-readable description. Items declared with only a description are
//! numbered automatically; items declared as `(value, description)` keep
//! their value and reset the numbering baseline.
//!
//! # Modules
//!
//! - [`builder`]: Declarations and the numbering builder
//! - [`table`]: The built enumeration, members and dict export
//! - [`format`]: Placeholder substitution for descriptions
//! - [`config`]: Initial number and export key settings
//! - [`definition`]: TOML-loadable enumeration definitions
//! - [`identity`]: Member values and raw initializer arguments
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```
//! use docenum_core::{DocEnum, FieldNames, Param};
//!
//! let status = DocEnum::builder("APIStatus")
//!     .field_names(FieldNames::new("name", "code", "msg"))
//!     .explicit("OK", "0000", "request complete")
//!     .explicit("Missing", "1002", "argument \"{}\" does not exist")
//!     .build()?;
//!
//! let missing = status.get("Missing").unwrap();
//! assert_eq!(
//!     missing.format_doc(&Param::from("http_method")),
//!     "argument \"http_method\" does not exist"
//! );
//! assert_eq!(missing.to_dict()["code"], "1002");
//! # Ok::<(), docenum_core::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod definition;
pub mod error;
pub mod format;
pub mod identity;
pub mod table;

// Re-export key types at crate root for convenience
pub use builder::{Declaration, DocEnumBuilder};
pub use config::{EnumConfig, FieldNames};
pub use definition::EnumDefinition;
pub use error::{CodedError, DefinitionError, Error, Result};
pub use format::{Param, format_template};
pub use identity::{Arg, Identity};
pub use table::{Choice, Dict, DocEnum, Item, Member};
