// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! Translations live in the JSON content document, keyed by locale code.
//! This module handles locale detection, dotted-key resolution with a
//! deterministic fallback chain (active locale → `en` → the key itself),
//! and runtime locale switching with preference persistence.

pub mod locale;
pub mod resolver;

pub use locale::{detect, Locale, SUPPORTED};
pub use resolver::{I18n, Resolved};
