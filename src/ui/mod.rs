// SPDX-License-Identifier: MPL-2.0
//! Page rendering.
//!
//! Takes the pristine page template and an [`I18n`] context and produces
//! the complete page for the active locale: `lang` attribute, direct text
//! bindings, the six structured content regions, and the language toggle.
//! Every render starts from the pristine template; there is no diffing.

pub mod bindings;
pub mod regions;
pub mod toggle;

use crate::i18n::I18n;

/// The six region container ids, paired with the dotted key of the record
/// list that fills each one and the builder that shapes its cards.
const REGIONS: [(&str, &str, fn(&[crate::content::Value]) -> String); 6] = [
    ("framework-features-list", "frameworkFeatures.items", regions::feature_cards),
    ("functional-modules-list", "functionalModules.modules", regions::module_cards),
    ("industry-solutions-list", "industrySolutions.solutions", regions::solution_cards),
    ("technical-capabilities-list", "technicalCapabilities.items", regions::capability_items),
    ("development-efficiency-list", "developmentEfficiency.items", regions::efficiency_items),
    ("commitments-list", "commitments.items", regions::commitment_cards),
];

/// Renders the full page for the resolver's active locale.
pub fn render_page(template: &str, i18n: &I18n) -> String {
    let mut html = bindings::set_lang_attribute(template, i18n.locale().code());
    html = bindings::apply_text_bindings(&html, i18n);

    for (container_id, key, build) in REGIONS {
        let cards = build(i18n.resolve(key).items());
        html = bindings::inject(&html, container_id, &cards);
    }

    bindings::inject(&html, "language-toggle", &toggle::markup(i18n.locale()))
}

/// The minimal static view shown when the content document cannot be
/// loaded. Replaces the whole page; nothing else is rendered.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body>
  <div class="min-h-screen flex items-center justify-center bg-gray-50">
    <div class="bg-white p-8 rounded-lg shadow-md max-w-md">
      <h1 class="text-2xl font-bold text-red-600 mb-4">Error Loading Content</h1>
      <p class="text-gray-700 mb-4">Unable to load website content. Please try refreshing the page.</p>
      <p class="text-sm text-gray-500">Error: {}</p>
    </div>
  </div>
</body>
</html>
"#,
        message
    )
}
