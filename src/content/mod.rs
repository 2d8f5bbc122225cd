// SPDX-License-Identifier: MPL-2.0
//! The content document and its loader.
//!
//! The document is a single JSON object keyed by locale code, each value a
//! nested mapping of translation keys to strings, lists, or records. It is
//! loaded once at startup and never mutated afterwards. Its shape is
//! consistent across locales by convention only: nothing here validates it,
//! and a malformed bundle surfaces later as resolution misses rather than
//! as a load-time error.

pub mod loader;
pub mod value;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use value::Value;

/// The nested translation data for one locale.
pub type LocaleBundle = BTreeMap<String, Value>;

/// The full content document: locale code → bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(BTreeMap<String, LocaleBundle>);

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundle for a locale code, if the document carries one.
    pub fn bundle(&self, code: &str) -> Option<&LocaleBundle> {
        self.0.get(code)
    }

    pub fn has_locale(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }
}
