// SPDX-License-Identifier: MPL-2.0
//! The language toggle.
//!
//! Markup is a pure function of the active locale: exactly one button
//! carries the emphasized styling, the rest are de-emphasized. Rebuilding
//! after every switch is idempotent.

use crate::i18n::{Locale, SUPPORTED};
use std::fmt::Write;

const BASE_CLASSES: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors duration-150";
const ACTIVE_CLASSES: &str = "bg-blue-600 text-white";
const INACTIVE_CLASSES: &str = "bg-gray-200 text-gray-700 hover:bg-gray-300";

/// The styling classes for one toggle button.
pub fn button_classes(locale: Locale, active: Locale) -> String {
    let state = if locale == active { ACTIVE_CLASSES } else { INACTIVE_CLASSES };
    format!("{} {}", BASE_CLASSES, state)
}

/// Builds the toggle's button row for the given active locale.
pub fn markup(active: Locale) -> String {
    let mut out = String::new();
    for locale in SUPPORTED {
        let _ = write!(
            out,
            r#"<button data-lang="{code}" class="{classes}" aria-label="Switch to {label}">{label}</button>"#,
            code = locale.code(),
            classes = button_classes(locale, active),
            label = locale.label(),
        );
    }
    out
}
