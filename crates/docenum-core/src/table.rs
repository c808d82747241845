//! The built enumeration and its members.
//!
//! A [`DocEnum`] is an immutable table of [`Item`]s in declaration order,
//! indexed by name and by value. Members are handed out as [`Member`]
//! views, which pair an item with the table's export keys so they can
//! produce dicts and formatted messages.

use std::collections::HashMap;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::builder::DocEnumBuilder;
use crate::config::FieldNames;
use crate::definition::EnumDefinition;
use crate::error::{CodedError, Result};
use crate::format::{Param, format_template};
use crate::identity::Identity;

/// Exported form of a member: `{name-key, value-key, doc-key}`.
pub type Dict = serde_json::Map<String, serde_json::Value>;

/// One (value, description) pair of [`DocEnum::list_choices`].
pub type Choice = (Identity, String);

// ============================================================================
// Item
// ============================================================================

/// A named, immutable enumeration record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    value: Identity,
    doc: String,
}

impl Item {
    pub(crate) fn new(name: String, value: Identity, doc: String) -> Self {
        Self { name, value, doc }
    }

    /// The identifier the item is declared under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assigned or supplied value.
    pub fn value(&self) -> &Identity {
        &self.value
    }

    /// The description, possibly containing a placeholder.
    pub fn doc(&self) -> &str {
        &self.doc
    }
}

// ============================================================================
// DocEnum
// ============================================================================

/// An immutable, documented enumeration.
///
/// # Example
///
/// ```
/// use docenum_core::{DocEnum, Identity};
///
/// let errors = DocEnum::builder("ClientSideError")
///     .initial_number(400)
///     .auto("BadRequest", "bad request")
///     .auto("Unauthorized", "client authentication failed")
///     .explicit("RequestTimeout", 409, "request timed out")
///     .build()
///     .unwrap();
///
/// let timeout = errors.get("RequestTimeout").unwrap();
/// assert_eq!(timeout.value(), &Identity::Int(409));
/// assert_eq!(errors.get("Unauthorized").unwrap().value(), &Identity::Int(401));
/// ```
#[derive(Debug, Clone)]
pub struct DocEnum {
    name: String,
    field_names: FieldNames,
    items: Vec<Item>,
    by_name: HashMap<String, usize>,
    by_value: HashMap<Identity, usize>,
}

impl DocEnum {
    /// Start declaring an enumeration called `name`.
    pub fn builder(name: impl Into<String>) -> DocEnumBuilder {
        DocEnumBuilder::new(name)
    }

    /// Build an enumeration from a TOML definition string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        EnumDefinition::from_toml_str(source)?.build()
    }

    /// Build an enumeration from a TOML definition file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        EnumDefinition::from_file(path)?.build()
    }

    /// Assemble a table from already-validated items.
    ///
    /// Callers guarantee names and values are unique.
    pub(crate) fn from_items(name: String, field_names: FieldNames, items: Vec<Item>) -> Self {
        let by_name = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.name.clone(), i))
            .collect();
        let by_value = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.value.clone(), i))
            .collect();
        Self {
            name,
            field_names,
            items,
            by_name,
            by_value,
        }
    }

    /// The enumeration's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys used by [`Member::to_dict`].
    pub fn field_names(&self) -> &FieldNames {
        &self.field_names
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the enumeration has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look a member up by name.
    pub fn get(&self, name: &str) -> Option<Member<'_>> {
        self.by_name.get(name).and_then(|&i| self.member_at(i))
    }

    /// Look a member up by value.
    pub fn by_value(&self, value: &Identity) -> Option<Member<'_>> {
        self.by_value.get(value).and_then(|&i| self.member_at(i))
    }

    /// The member at a declaration position.
    pub fn member_at(&self, index: usize) -> Option<Member<'_>> {
        self.items.get(index).map(|item| Member { table: self, item })
    }

    /// Whether a member called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Members in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Member<'_>> + '_ {
        self.items.iter().map(move |item| Member { table: self, item })
    }

    /// `(value, description)` for every member, in declaration order.
    ///
    /// Suitable wherever a selectable option list is needed.
    pub fn list_choices(&self) -> Vec<Choice> {
        self.items
            .iter()
            .map(|item| (item.value.clone(), item.doc.clone()))
            .collect()
    }

    /// Every member exported as a dict, in declaration order.
    pub fn to_dicts(&self) -> Vec<Dict> {
        self.iter().map(|m| m.to_dict()).collect()
    }
}

impl Serialize for DocEnum {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|m| m.to_dict()))
    }
}

// ============================================================================
// Member
// ============================================================================

/// A member of a [`DocEnum`], borrowed together with its table.
#[derive(Clone, Copy, Debug)]
pub struct Member<'a> {
    table: &'a DocEnum,
    item: &'a Item,
}

impl<'a> Member<'a> {
    /// The member's name.
    pub fn name(&self) -> &'a str {
        &self.item.name
    }

    /// The member's value.
    pub fn value(&self) -> &'a Identity {
        &self.item.value
    }

    /// The member's description template.
    pub fn doc(&self) -> &'a str {
        &self.item.doc
    }

    /// The underlying item.
    pub fn item(&self) -> &'a Item {
        self.item
    }

    /// The enumeration this member belongs to.
    pub fn table(&self) -> &'a DocEnum {
        self.table
    }

    /// Export as `{name-key: name, value-key: value, doc-key: description}`.
    pub fn to_dict(&self) -> Dict {
        let keys = &self.table.field_names;
        let mut dict = Dict::new();
        dict.insert(keys.name.clone(), self.item.name.clone().into());
        dict.insert(keys.value.clone(), self.item.value.clone().into());
        dict.insert(keys.doc.clone(), self.item.doc.clone().into());
        dict
    }

    /// The description with `param` substituted into its placeholder.
    pub fn format_doc(&self, param: &Param) -> String {
        format_template(&self.item.doc, param)
    }

    /// The exported dict, with the description formatted whenever `param`
    /// is supplied.
    pub fn message(&self, param: Option<&Param>) -> Dict {
        let mut dict = self.to_dict();
        if let Some(param) = param {
            let key = self.table.field_names.doc.clone();
            dict.insert(key, self.format_doc(param).into());
        }
        dict
    }

    /// Raise this member as a [`CodedError`] with the given status.
    pub fn to_error(&self, status: u16, param: Option<&Param>) -> CodedError {
        CodedError::from_member(*self, status, param)
    }
}

impl PartialEq for Member<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table) && self.item == other.item
    }
}
