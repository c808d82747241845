//! Error types for documented enumerations.
//!
//! Two kinds of failure exist:
//!
//! - [`DefinitionError`]: an enumeration could not be built from its
//!   declarations. Raised once, while the table is constructed, and meant to
//!   fail fast during startup.
//! - [`CodedError`]: an application error keyed by an enumeration member,
//!   carrying an HTTP-style status and the member's exported message.
//!
//! Both are variants of the crate-level [`Error`], alongside the I/O and
//! parse failures of loading a definition from TOML.

use serde::Serialize;
use thiserror::Error;

use crate::format::Param;
use crate::identity::Identity;
use crate::table::{Dict, Member};

/// Errors that can occur while defining or using documented enumerations.
#[derive(Error, Debug)]
pub enum Error {
    /// The enumeration declarations are invalid.
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// A deliberately raised application error.
    #[error(transparent)]
    Coded(#[from] CodedError),

    /// I/O error while reading a definition file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A definition file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns the definition error, if this is one.
    pub fn as_definition(&self) -> Option<&DefinitionError> {
        match self {
            Self::Definition(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the coded error, if this is one.
    pub fn as_coded(&self) -> Option<&CodedError> {
        match self {
            Self::Coded(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Definition errors
// ============================================================================

/// Reasons an enumeration declaration is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    /// An item was declared with no initializer arguments.
    #[error("item {name:?} has no initializer arguments")]
    MissingArguments { name: String },

    /// An item was declared with more than `(value, description)`.
    #[error("item {name:?} takes at most 2 initializer arguments, got {count}")]
    TooManyArguments { name: String, count: usize },

    /// The description argument cannot be rendered as a readable string.
    #[error("item {name:?}: initializer {arg} cannot be converted to a description")]
    NotDescribable { name: String, arg: String },

    /// The explicit value is neither an integer nor a string.
    #[error("item {name:?}: {arg} is not a valid value")]
    InvalidValue { name: String, arg: String },

    /// Two items share a name.
    #[error("item name {name:?} is declared more than once")]
    DuplicateName { name: String },

    /// Two items share a value.
    #[error("item {name:?} reuses value {value} already assigned to {existing:?}")]
    DuplicateValue {
        name: String,
        value: Identity,
        existing: String,
    },

    /// Auto-numbering ran past the integer range.
    #[error("item {name:?}: value counter overflowed after {last}")]
    CounterOverflow { name: String, last: i64 },

    /// Two export keys collide, so `to_dict` would drop a field.
    #[error("export keys must be distinct, {key:?} is used twice")]
    ConflictingFieldNames { key: String },
}

// ============================================================================
// Coded errors
// ============================================================================

/// An application error raised from an enumeration member.
///
/// `msg` is the member's exported dict (see [`Member::to_dict`]) with the
/// description already formatted. Callers translate this into a response at
/// their API boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodedError {
    /// HTTP-style status chosen by the caller.
    pub status: u16,
    /// Exported message with name, value and description keys.
    pub msg: Dict,
}

impl CodedError {
    /// Create a coded error from an existing message payload.
    pub fn new(status: u16, msg: Dict) -> Self {
        Self { status, msg }
    }

    /// Build the error for `member`, substituting `param` into its description.
    pub fn from_member(member: Member<'_>, status: u16, param: Option<&Param>) -> Self {
        Self::new(status, member.message(param))
    }

    /// Read a field of the message by key.
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.msg.get(key)
    }
}

impl std::fmt::Display for CodedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = serde_json::Value::Object(self.msg.clone());
        write!(f, "HTTP {}: {}", self.status, msg)
    }
}

impl std::error::Error for CodedError {}
