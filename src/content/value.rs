// SPDX-License-Identifier: MPL-2.0
//! Tagged translation values.
//!
//! A bundle entry is one of three shapes: a plain string, an ordered list,
//! or a nested record. Traversal over these shapes is total: an absent or
//! non-traversable step yields `None` rather than a fault, which is what
//! lets a resolution miss degrade to the raw key instead of breaking the
//! page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single translation value as found in the content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<Value>),
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Walks a dotted path into this value.
    ///
    /// Every step requires the current value to be a record holding the
    /// segment; anything else short-circuits to `None`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(self, |current, segment| match current {
            Value::Record(fields) => fields.get(segment),
            _ => None,
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up a direct field of a record value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_record().and_then(|fields| fields.get(name))
    }

    /// Stringified field of a record, with an absent field rendering as the
    /// empty string. This is the defined policy for structured region
    /// records that are missing expected fields.
    pub fn field_text(&self, name: &str) -> String {
        match self.field(name) {
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}

/// Direct stringification: text prints verbatim, lists join their items
/// with `", "`, records serialize as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Record(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Walks a dotted path starting from a locale bundle (a map of top-level
/// keys), descending into nested records for the remaining segments.
pub fn lookup<'a>(bundle: &'a BTreeMap<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = bundle.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Record(fields) => fields.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}
