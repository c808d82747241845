//! Placeholder substitution for member descriptions.
//!
//! Descriptions may carry a positional placeholder (`"missing {} argument"`).
//! [`format_template`] fills it with a [`Param`]. Text parameters are inserted
//! as-is; lists are rendered with quoted elements, so `["10001"]` fills
//! `"missing {}"` as `"missing ['10001']"`.
//!
//! Supported syntax: `{}` and `{0}` insert the parameter, `{{` and `}}` are
//! literal braces. Every `{}` receives the same parameter. Any other field
//! (`{name}`, `{1}`, an unclosed `{`) is copied through unchanged instead of
//! failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A substitution parameter for a description placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Int(i64),
    Text(String),
    List(Vec<Param>),
}

impl Param {
    /// Quoted form used for list elements: `'abc'`, `42`, `['a', 'b']`.
    pub fn repr(&self) -> String {
        match self {
            Self::Text(s) => quote(s),
            Self::Int(_) | Self::List(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&item.repr())?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Param {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl<T: Into<Param>> From<Vec<T>> for Param {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Quote text with single quotes, or double quotes when it contains a single
/// quote and no double quote.
pub(crate) fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

// ============================================================================
// Template formatting
// ============================================================================

/// Substitute `param` into every `{}` / `{0}` placeholder of `template`.
pub fn format_template(template: &str, param: &Param) -> String {
    let rendered = param.to_string();
    let mut out = String::with_capacity(template.len() + rendered.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('{') {
            match after.find('}') {
                Some(end) if matches!(&after[..end], "" | "0") => {
                    out.push_str(&rendered);
                    rest = &after[end + 1..];
                }
                Some(end) => {
                    // Unknown field, kept verbatim.
                    out.push_str(&tail[..end + 2]);
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(tail);
                    rest = "";
                }
            }
        } else {
            out.push('}');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
