//! Member values and raw initializer arguments.
//!
//! An [`Identity`] is the value a member is known by: an integer when it was
//! auto-numbered, or whatever integer or string was supplied explicitly. An
//! [`Arg`] is one positional initializer argument as written in a
//! declaration, before it has been checked.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::quote;

/// The value of an enumeration member.
///
/// Serializes untagged: `Int(404)` becomes `404`, `Str("10001")` becomes
/// `"10001"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Integer value, either assigned or supplied.
    Int(i64),
    /// Externally supplied string value, such as a zero-padded code.
    Str(String),
}

impl Identity {
    /// Returns the integer value, if this is an integer identity.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a string identity.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }

    /// The number auto-numbering continues from after this value.
    ///
    /// Integers count as themselves. Strings count only when they parse as
    /// an integer (`"10001"` -> `10001`); other strings leave the counter
    /// where it was.
    pub fn numbering_baseline(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identity {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Identity {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Identity> for serde_json::Value {
    fn from(id: Identity) -> Self {
        match id {
            Identity::Int(n) => n.into(),
            Identity::Str(s) => s.into(),
        }
    }
}

// ============================================================================
// Initializer arguments
// ============================================================================

/// One positional argument of an item declaration.
///
/// A declaration carries either `[description]` or `[value, description]`.
/// Arguments are checked when the enumeration is built, so invalid shapes
/// (too many arguments, a table where a description belongs) surface as
/// [`DefinitionError`](crate::DefinitionError)s rather than type errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Arg>),
    /// A keyed table, as written inline in a TOML declaration.
    Table(BTreeMap<String, Arg>),
}

impl Arg {
    /// Render the argument as a description.
    ///
    /// Text is used as-is. Other values render the way they print in the
    /// declaring source: `True`, `404`, `1e+20`, `['a', 2]`. Tables have no
    /// description form and yield `None`.
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Table(_) => None,
            other => other.repr(),
        }
    }

    /// Quoted form used inside lists: text becomes `'text'`.
    fn repr(&self) -> Option<String> {
        match self {
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(x) => Some(float_text(*x)),
            Self::Str(s) => Some(quote(s)),
            Self::List(items) => {
                let parts = items.iter().map(Self::repr).collect::<Option<Vec<_>>>()?;
                Some(format!("[{}]", parts.join(", ")))
            }
            Self::Table(_) => None,
        }
    }

    /// Interpret the argument as an explicit member value.
    pub fn to_identity(&self) -> Option<Identity> {
        match self {
            Self::Int(n) => Some(Identity::Int(*n)),
            Self::Str(s) => Some(Identity::Str(s.clone())),
            Self::Bool(_) | Self::Float(_) | Self::List(_) | Self::Table(_) => None,
        }
    }
}

/// Shortest round-trip text for a float, with an exponent outside
/// `1e-4 <= |x| < 1e16` written as `1e+20` / `1e-07`.
fn float_text(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{x:?}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if x == 0.0 || (-4..16).contains(&exp) {
        format!("{x:?}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Table(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                f.write_str("}")
            }
            other => match other.repr() {
                Some(text) => f.write_str(&text),
                None => Ok(()),
            },
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<Identity> for Arg {
    fn from(id: Identity) -> Self {
        match id {
            Identity::Int(n) => Self::Int(n),
            Identity::Str(s) => Self::Str(s),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display() {
        assert_eq!(Identity::Int(404).to_string(), "404");
        assert_eq!(Identity::from("10001").to_string(), "10001");
    }

    #[test]
    fn test_identity_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Identity::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&Identity::from("0000")).unwrap(),
            "\"0000\""
        );
        let parsed: Identity = serde_json::from_str("\"20001\"").unwrap();
        assert_eq!(parsed, Identity::Str("20001".into()));
    }

    #[test]
    fn test_numbering_baseline() {
        assert_eq!(Identity::Int(409).numbering_baseline(), Some(409));
        assert_eq!(Identity::from("10001").numbering_baseline(), Some(10001));
        assert_eq!(Identity::from("0000").numbering_baseline(), Some(0));
        assert_eq!(Identity::from("E-1").numbering_baseline(), None);
    }

    #[test]
    fn test_identity_accessors() {
        assert_eq!(Identity::Int(1).as_int(), Some(1));
        assert_eq!(Identity::Int(1).as_str(), None);
        assert_eq!(Identity::from("x").as_str(), Some("x"));
        assert_eq!(Identity::from("x").as_int(), None);
    }

    #[test]
    fn test_arg_describe_scalars() {
        assert_eq!(Arg::from("text").describe().as_deref(), Some("text"));
        assert_eq!(Arg::from(12).describe().as_deref(), Some("12"));
        assert_eq!(Arg::from(true).describe().as_deref(), Some("True"));
        assert_eq!(Arg::from(2.5).describe().as_deref(), Some("2.5"));
        assert_eq!(Arg::from(1.0).describe().as_deref(), Some("1.0"));
    }

    #[test]
    fn test_arg_describe_float_exponents() {
        assert_eq!(Arg::from(1e20).describe().as_deref(), Some("1e+20"));
        assert_eq!(Arg::from(1e-7).describe().as_deref(), Some("1e-07"));
        assert_eq!(Arg::from(-1.5e16).describe().as_deref(), Some("-1.5e+16"));
        assert_eq!(Arg::from(1e15).describe().as_deref(), Some("1000000000000000.0"));
        assert_eq!(Arg::from(0.0001).describe().as_deref(), Some("0.0001"));
        assert_eq!(Arg::from(1e-5).describe().as_deref(), Some("1e-05"));
        assert_eq!(Arg::from(0.0).describe().as_deref(), Some("0.0"));
        assert_eq!(Arg::from(f64::INFINITY).describe().as_deref(), Some("inf"));
        assert_eq!(Arg::from(f64::NAN).describe().as_deref(), Some("nan"));
    }

    #[test]
    fn test_arg_describe_list() {
        let arg = Arg::List(vec![Arg::from("a"), Arg::from(2)]);
        assert_eq!(arg.describe().as_deref(), Some("['a', 2]"));

        let nested = Arg::List(vec![Arg::from(true), Arg::List(vec![Arg::from("it's")])]);
        assert_eq!(nested.describe().as_deref(), Some("[True, [\"it's\"]]"));
        assert_eq!(Arg::List(vec![]).describe().as_deref(), Some("[]"));
    }

    #[test]
    fn test_arg_table_is_not_a_description() {
        let table = Arg::Table(BTreeMap::from([("k".to_string(), Arg::from(1))]));
        assert_eq!(table.describe(), None);
        assert_eq!(table.to_string(), "{k = 1}");

        let list_with_table = Arg::List(vec![table]);
        assert_eq!(list_with_table.describe(), None);
    }

    #[test]
    fn test_arg_to_identity() {
        assert_eq!(Arg::from(5).to_identity(), Some(Identity::Int(5)));
        assert_eq!(Arg::from("5").to_identity(), Some(Identity::from("5")));
        assert_eq!(Arg::from(false).to_identity(), None);
        assert_eq!(Arg::from(0.5).to_identity(), None);
        assert_eq!(Arg::Table(BTreeMap::new()).to_identity(), None);
    }

    #[test]
    fn test_arg_display() {
        let arg = Arg::List(vec![Arg::from("a"), Arg::from(2)]);
        assert_eq!(arg.to_string(), "[\"a\", 2]");
    }

    #[test]
    fn test_arg_deserializes_untagged() {
        let args: Vec<Arg> = serde_json::from_str(r#"[409, "timeout", true, ["x"]]"#).unwrap();
        assert_eq!(
            args,
            vec![
                Arg::Int(409),
                Arg::Str("timeout".into()),
                Arg::Bool(true),
                Arg::List(vec![Arg::Str("x".into())]),
            ]
        );
    }
}
