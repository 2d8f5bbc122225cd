// SPDX-License-Identifier: MPL-2.0
//! Markup builders for the six structured content regions.
//!
//! Each builder takes the region's resolved records and emits one card or
//! list item per record. Values are interpolated as-is; a record missing an
//! expected field contributes an empty string for that field, and the card
//! structure is still emitted.

use crate::content::Value;
use std::fmt::Write;

/// Framework feature cards: `name` + `description`.
pub fn feature_cards(items: &[Value]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            r#"<div class="bg-white shadow-md rounded-lg p-6">
      <h3 class="text-xl font-bold mb-2 text-gray-900">{}</h3>
      <p class="text-gray-700">{}</p>
    </div>"#,
            item.field_text("name"),
            item.field_text("description"),
        );
    }
    out
}

/// Functional module cards: `name`, `description`, and a bulleted
/// `capabilities` list.
pub fn module_cards(items: &[Value]) -> String {
    let mut out = String::new();
    for item in items {
        let mut capabilities = String::new();
        for cap in item.field("capabilities").and_then(Value::as_list).unwrap_or(&[]) {
            let _ = write!(capabilities, "<li>{}</li>", cap);
        }
        let _ = write!(
            out,
            r#"<div class="bg-white shadow-md rounded-lg p-6">
      <h3 class="text-xl font-bold mb-2 text-gray-900">{}</h3>
      <p class="text-gray-700 mb-3">{}</p>
      <ul class="list-disc list-inside text-gray-600 space-y-1">{}</ul>
    </div>"#,
            item.field_text("name"),
            item.field_text("description"),
            capabilities,
        );
    }
    out
}

/// Industry solution cards: `name`, plus comma-joined `modules` and
/// `industries` lists.
pub fn solution_cards(items: &[Value]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            r#"<div class="border border-gray-200 rounded-lg p-6">
      <h3 class="text-xl font-bold mb-3 text-gray-900">{}</h3>
      <div class="mb-3">
        <p class="font-semibold text-gray-700 mb-1">Modules:</p>
        <p class="text-gray-600">{}</p>
      </div>
      <div>
        <p class="font-semibold text-gray-700 mb-1">Target Industries:</p>
        <p class="text-gray-600">{}</p>
      </div>
    </div>"#,
            item.field_text("name"),
            item.field_text("modules"),
            item.field_text("industries"),
        );
    }
    out
}

/// Technical capability list items, check-marked.
pub fn capability_items(items: &[Value]) -> String {
    marked_items(items, r#"<span class="text-blue-600 mr-2">✓</span>"#)
}

/// Development efficiency list items, arrow-marked.
pub fn efficiency_items(items: &[Value]) -> String {
    marked_items(items, r#"<span class="text-green-600 mr-2">▸</span>"#)
}

fn marked_items(items: &[Value], marker: &str) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            r#"<li class="text-gray-700 flex items-start">{}<span>{}</span></li>"#,
            marker, item,
        );
    }
    out
}

/// Commitment cards: `title` + `description`.
pub fn commitment_cards(items: &[Value]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            r#"<div class="bg-white border-l-4 border-blue-500 p-6 rounded-r-lg shadow-md">
      <h3 class="text-lg font-bold mb-2 text-gray-900">{}</h3>
      <p class="text-gray-700">{}</p>
    </div>"#,
            item.field_text("title"),
            item.field_text("description"),
        );
    }
    out
}
