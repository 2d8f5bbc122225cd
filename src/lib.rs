// SPDX-License-Identifier: MPL-2.0
//! `moonote_site` renders the Moonote marketing site.
//!
//! It loads a single JSON content document keyed by locale, resolves
//! translated values across four locales (`en`, `zh-TW`, `zh-CN`, `th`)
//! with a deterministic fallback chain, and produces a complete HTML page
//! from a template: tagged text elements, six structured content regions,
//! and a language toggle. Missing translations degrade to the raw key
//! rather than breaking the page.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
