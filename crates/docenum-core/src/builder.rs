//! Declaring enumerations.
//!
//! [`DocEnumBuilder`] collects ordered [`Declaration`]s and turns them into a
//! [`DocEnum`] in one pass, assigning values as it goes:
//!
//! - A declaration with one argument is a description. It receives the last
//!   assigned number plus one, starting from the configured initial number.
//! - A declaration with two arguments is `(value, description)`. The value
//!   is used verbatim and becomes the number later auto-numbered items
//!   continue from (string values count when they parse as integers).
//!
//! Because numbering always continues from the most recent explicit value,
//! an explicit value below the counter makes later items count down into
//! already-used territory. That is passed through as declared; collisions
//! it causes are reported as [`DefinitionError::DuplicateValue`].
//!
//! ```
//! use docenum_core::{DocEnum, Identity};
//!
//! let table = DocEnum::builder("Example")
//!     .initial_number(400)
//!     .auto("A", "x")
//!     .auto("B", "y")
//!     .explicit("C", 409, "z")
//!     .auto("D", "w")
//!     .build()
//!     .unwrap();
//!
//! let values: Vec<_> = table.iter().map(|m| m.value().clone()).collect();
//! assert_eq!(values, [400, 401, 409, 410].map(Identity::Int));
//! ```

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{EnumConfig, FieldNames};
use crate::error::{DefinitionError, Result};
use crate::identity::{Arg, Identity};
use crate::table::{DocEnum, Item};

/// Maximum number of initializer arguments: `(value, description)`.
pub const MAX_ARGS: usize = 2;

// ============================================================================
// Declaration
// ============================================================================

/// One item as declared: a name and its positional initializer arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Item name.
    pub name: String,
    /// `[description]` or `[value, description]`.
    pub args: Vec<Arg>,
}

impl Declaration {
    /// Declare an item from raw arguments. Checked at build time.
    pub fn new(name: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Declare an auto-numbered item.
    pub fn auto(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, vec![Arg::Str(doc.into())])
    }

    /// Declare an item with an explicit value.
    pub fn explicit(
        name: impl Into<String>,
        value: impl Into<Identity>,
        doc: impl Into<String>,
    ) -> Self {
        Self::new(name, vec![value.into().into(), Arg::Str(doc.into())])
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects declarations and builds a [`DocEnum`].
#[derive(Clone, Debug)]
pub struct DocEnumBuilder {
    name: String,
    config: EnumConfig,
    declarations: Vec<Declaration>,
}

impl DocEnumBuilder {
    /// Create a builder with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: EnumConfig::default(),
            declarations: Vec::new(),
        }
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: EnumConfig) -> Self {
        self.config = config;
        self
    }

    /// Value for the first auto-numbered item.
    pub fn initial_number(mut self, initial: i64) -> Self {
        self.config.initial_number = initial;
        self
    }

    /// Export key names.
    pub fn field_names(mut self, names: FieldNames) -> Self {
        self.config.field_names = names;
        self
    }

    /// Add an auto-numbered item.
    pub fn auto(self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.declaration(Declaration::auto(name, doc))
    }

    /// Add an item with an explicit value.
    pub fn explicit(
        self,
        name: impl Into<String>,
        value: impl Into<Identity>,
        doc: impl Into<String>,
    ) -> Self {
        self.declaration(Declaration::explicit(name, value, doc))
    }

    /// Add an item from raw positional arguments.
    pub fn declare(self, name: impl Into<String>, args: Vec<Arg>) -> Self {
        self.declaration(Declaration::new(name, args))
    }

    /// Add a prepared declaration.
    pub fn declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Add several declarations in order.
    pub fn declarations(mut self, declarations: impl IntoIterator<Item = Declaration>) -> Self {
        self.declarations.extend(declarations);
        self
    }

    /// Validate the declarations, assign values and build the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`](crate::Error::Definition) on the first
    /// invalid declaration.
    pub fn build(self) -> Result<DocEnum> {
        self.config.field_names.validate()?;

        let mut counter = Counter::new(self.config.initial_number);
        let mut items = Vec::with_capacity(self.declarations.len());
        let mut names = HashSet::with_capacity(self.declarations.len());
        let mut values: HashMap<Identity, String> = HashMap::new();

        for Declaration { name, args } in self.declarations {
            let (value, doc) = resolve(&name, &args, &mut counter)?;

            if !names.insert(name.clone()) {
                return Err(DefinitionError::DuplicateName { name }.into());
            }
            if let Some(existing) = values.get(&value) {
                return Err(DefinitionError::DuplicateValue {
                    name,
                    value,
                    existing: existing.clone(),
                }
                .into());
            }

            trace!("{}.{} = {}", self.name, name, value);
            values.insert(value.clone(), name.clone());
            items.push(Item::new(name, value, doc));
        }

        debug!("Built enumeration {} with {} items", self.name, items.len());
        Ok(DocEnum::from_items(
            self.name,
            self.config.field_names,
            items,
        ))
    }
}

// ============================================================================
// Numbering
// ============================================================================

/// Tracks the last assigned number.
#[derive(Debug)]
struct Counter {
    last: i64,
    started: bool,
    initial: i64,
}

impl Counter {
    fn new(initial: i64) -> Self {
        Self {
            last: initial,
            started: false,
            initial,
        }
    }

    fn next(&mut self, name: &str) -> std::result::Result<i64, DefinitionError> {
        let value = if self.started {
            self.last
                .checked_add(1)
                .ok_or_else(|| DefinitionError::CounterOverflow {
                    name: name.to_string(),
                    last: self.last,
                })?
        } else {
            self.initial
        };
        self.last = value;
        self.started = true;
        Ok(value)
    }

    fn rebase(&mut self, name: &str, baseline: i64) {
        if self.started && baseline <= self.last {
            warn!(
                "{name}: explicit value {baseline} is not above the last assigned number {}, \
                 numbering continues from {baseline}",
                self.last
            );
        }
        self.last = baseline;
        self.started = true;
    }
}

/// Turn one declaration's arguments into a value and description.
fn resolve(
    name: &str,
    args: &[Arg],
    counter: &mut Counter,
) -> std::result::Result<(Identity, String), DefinitionError> {
    match args {
        [] => Err(DefinitionError::MissingArguments {
            name: name.to_string(),
        }),
        [doc] => {
            let doc = describe(name, doc)?;
            let value = counter.next(name)?;
            Ok((Identity::Int(value), doc))
        }
        [value, doc] => {
            let value = value
                .to_identity()
                .ok_or_else(|| DefinitionError::InvalidValue {
                    name: name.to_string(),
                    arg: value.to_string(),
                })?;
            let doc = describe(name, doc)?;
            if let Some(baseline) = value.numbering_baseline() {
                counter.rebase(name, baseline);
            }
            Ok((value, doc))
        }
        _ => Err(DefinitionError::TooManyArguments {
            name: name.to_string(),
            count: args.len(),
        }),
    }
}

fn describe(name: &str, arg: &Arg) -> std::result::Result<String, DefinitionError> {
    arg.describe().ok_or_else(|| DefinitionError::NotDescribable {
        name: name.to_string(),
        arg: arg.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
