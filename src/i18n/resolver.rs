// SPDX-License-Identifier: MPL-2.0
//! The translation resolver.
//!
//! [`I18n`] is an explicitly constructed context owned by the renderer: it
//! holds the loaded content document, the single mutable active locale, and
//! the path of the preference record written on every explicit switch.
//! There is no ambient global state.

use crate::config;
use crate::content::{value, ContentDocument, Value};
use crate::i18n::locale::Locale;
use std::path::PathBuf;

/// Result of a key lookup: the value found in the fallback chain, or the
/// original key acting as a visible placeholder.
///
/// The degrade-to-key behavior is deliberate: missing translations show up
/// as raw keys translators can spot, rather than breaking the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Value(&'a Value),
    Missing(&'a str),
}

impl<'a> Resolved<'a> {
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Value(v) => Some(v),
            Resolved::Missing(_) => None,
        }
    }

    /// The display string: the value's direct stringification, or the key
    /// itself on a miss.
    pub fn text(&self) -> String {
        match self {
            Resolved::Value(v) => v.to_string(),
            Resolved::Missing(key) => (*key).to_string(),
        }
    }

    /// The value's list items, or an empty slice when the resolution missed
    /// or the value is not a list.
    pub fn items(&self) -> &'a [Value] {
        self.value().and_then(Value::as_list).unwrap_or(&[])
    }
}

pub struct I18n {
    document: ContentDocument,
    current_locale: Locale,
    config_path: Option<PathBuf>,
}

impl I18n {
    /// Builds a resolver over a loaded document.
    ///
    /// `config_path` overrides where the language preference is persisted;
    /// `None` uses the platform config directory.
    pub fn new(document: ContentDocument, initial: Locale, config_path: Option<PathBuf>) -> Self {
        Self {
            document,
            current_locale: initial,
            config_path,
        }
    }

    /// Replaces the held content document wholesale. The shape is not
    /// validated; a malformed bundle shows up later as resolution misses.
    pub fn load(&mut self, document: ContentDocument) {
        self.document = document;
    }

    pub fn locale(&self) -> Locale {
        self.current_locale
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Resolves a dotted key in the active locale.
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolved<'a> {
        self.resolve_in(key, self.current_locale)
    }

    /// Resolves a dotted key in a given locale, falling back to the default
    /// locale's bundle, then to the key itself.
    pub fn resolve_in<'a>(&'a self, key: &'a str, locale: Locale) -> Resolved<'a> {
        let mut hit = self
            .document
            .bundle(locale.code())
            .and_then(|bundle| value::lookup(bundle, key));

        if hit.is_none() && locale != Locale::FALLBACK {
            hit = self
                .document
                .bundle(Locale::FALLBACK.code())
                .and_then(|bundle| value::lookup(bundle, key));
        }

        match hit {
            Some(value) => Resolved::Value(value),
            None => Resolved::Missing(key),
        }
    }

    /// Shorthand for `resolve(key).text()`.
    pub fn text(&self, key: &str) -> String {
        self.resolve(key).text()
    }

    /// Switches the active locale and persists the choice.
    ///
    /// If the document carries no bundle for `locale`, this is a silent
    /// no-op: the active locale stays unchanged and nothing is written.
    /// Callers that need certainty must re-read [`I18n::locale`].
    pub fn set_locale(&mut self, locale: Locale) {
        if self.document.has_locale(locale.code()) {
            self.current_locale = locale;
            self.persist_preference(locale);
        }
    }

    fn persist_preference(&self, locale: Locale) {
        let result = match &self.config_path {
            Some(path) => {
                let mut cfg = config::load_from_path(path).unwrap_or_default();
                cfg.language = Some(locale.code().to_string());
                config::save_to_path(&cfg, path)
            }
            None => {
                let mut cfg = config::load().unwrap_or_default();
                cfg.language = Some(locale.code().to_string());
                config::save(&cfg)
            }
        };
        if let Err(err) = result {
            eprintln!("Failed to persist language preference: {}", err);
        }
    }
}
