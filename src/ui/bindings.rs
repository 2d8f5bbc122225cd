// SPDX-License-Identifier: MPL-2.0
//! Template binding: `data-i18n` text elements and region injection.
//!
//! The template is treated as flat text. A tagged element's text content is
//! everything between its opening tag's `>` and the next `<`; the scan is
//! deterministic and leaves malformed fragments untouched.

use crate::i18n::I18n;

const I18N_ATTR: &str = "data-i18n=\"";

/// Resolves every `data-i18n="key"` element against the active locale and
/// replaces its text content with the resolved string. Misses degrade to
/// the raw key.
pub fn apply_text_bindings(html: &str, i18n: &I18n) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(attr_start) = rest.find(I18N_ATTR) {
        let after_attr = &rest[attr_start + I18N_ATTR.len()..];
        let Some(key_end) = after_attr.find('"') else {
            break;
        };
        let key = &after_attr[..key_end];
        let tail = &after_attr[key_end + 1..];
        let Some(tag_close) = tail.find('>') else {
            break;
        };

        // Everything up to and including the opening tag stays as-is.
        out.push_str(&rest[..attr_start + I18N_ATTR.len() + key_end + 1]);
        out.push_str(&tail[..=tag_close]);
        out.push_str(&i18n.text(key));

        let content = &tail[tag_close + 1..];
        let text_end = content.find('<').unwrap_or(content.len());
        rest = &content[text_end..];
    }

    out.push_str(rest);
    out
}

/// Replaces the direct content of the element carrying `id="<id>"` with
/// `content`. Unknown ids leave the template unchanged.
pub fn inject(html: &str, id: &str, content: &str) -> String {
    let needle = format!("id=\"{}\"", id);
    let Some(attr_pos) = html.find(&needle) else {
        return html.to_string();
    };
    let Some(tag_close) = html[attr_pos..].find('>') else {
        return html.to_string();
    };
    let open_end = attr_pos + tag_close + 1;
    let old_len = html[open_end..].find('<').unwrap_or(html.len() - open_end);

    let mut out = String::with_capacity(html.len() + content.len());
    out.push_str(&html[..open_end]);
    out.push_str(content);
    out.push_str(&html[open_end + old_len..]);
    out
}

/// Rewrites (or adds) the `lang` attribute of the `<html>` element.
pub fn set_lang_attribute(html: &str, code: &str) -> String {
    let Some(tag_start) = html.find("<html") else {
        return html.to_string();
    };
    let Some(tag_close) = html[tag_start..].find('>') else {
        return html.to_string();
    };
    let tag = &html[tag_start..tag_start + tag_close + 1];

    let new_tag = if let Some(attr) = tag.find(" lang=\"") {
        let value_start = attr + " lang=\"".len();
        match tag[value_start..].find('"') {
            Some(value_len) => format!(
                "{}{}{}",
                &tag[..value_start],
                code,
                &tag[value_start + value_len..]
            ),
            None => return html.to_string(),
        }
    } else {
        format!("<html lang=\"{}\"{}", code, &tag["<html".len()..])
    };

    let mut out = String::with_capacity(html.len() + new_tag.len());
    out.push_str(&html[..tag_start]);
    out.push_str(&new_tag);
    out.push_str(&html[tag_start + tag_close + 1..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader;
    use crate::i18n::{I18n, Locale};

    fn i18n(locale: Locale) -> I18n {
        let document = loader::parse(
            r#"{
                "en": {"title": "Moonote", "nav": {"home": "Home"}},
                "zh-TW": {"title": "月言"}
            }"#,
        )
        .unwrap();
        I18n::new(document, locale, None)
    }

    #[test]
    fn binds_resolved_text_into_tagged_elements() {
        let html = r#"<h1 data-i18n="title">placeholder</h1>"#;
        let bound = apply_text_bindings(html, &i18n(Locale::ZhTw));
        assert_eq!(bound, r#"<h1 data-i18n="title">月言</h1>"#);
    }

    #[test]
    fn binds_nested_keys_and_multiple_elements() {
        let html = r#"<a data-i18n="nav.home"></a><h1 data-i18n="title">x</h1>"#;
        let bound = apply_text_bindings(html, &i18n(Locale::En));
        assert_eq!(bound, r#"<a data-i18n="nav.home">Home</a><h1 data-i18n="title">Moonote</h1>"#);
    }

    #[test]
    fn missing_keys_bind_the_key_itself() {
        let html = r#"<p data-i18n="not.there"></p>"#;
        let bound = apply_text_bindings(html, &i18n(Locale::En));
        assert_eq!(bound, r#"<p data-i18n="not.there">not.there</p>"#);
    }

    #[test]
    fn attributes_after_the_binding_survive() {
        let html = r#"<p data-i18n="title" class="lead">old</p>"#;
        let bound = apply_text_bindings(html, &i18n(Locale::En));
        assert_eq!(bound, r#"<p data-i18n="title" class="lead">Moonote</p>"#);
    }

    #[test]
    fn inject_fills_an_empty_container() {
        let html = r#"<div id="commitments-list"></div>"#;
        let filled = inject(html, "commitments-list", "<p>cards</p>");
        assert_eq!(filled, r#"<div id="commitments-list"><p>cards</p></div>"#);
    }

    #[test]
    fn inject_ignores_unknown_ids() {
        let html = r#"<div id="other"></div>"#;
        assert_eq!(inject(html, "commitments-list", "x"), html);
    }

    #[test]
    fn set_lang_rewrites_an_existing_attribute() {
        let html = r#"<html lang="en"><body></body></html>"#;
        assert_eq!(
            set_lang_attribute(html, "zh-TW"),
            r#"<html lang="zh-TW"><body></body></html>"#
        );
    }

    #[test]
    fn set_lang_adds_the_attribute_when_absent() {
        let html = "<html><body></body></html>";
        assert_eq!(
            set_lang_attribute(html, "th"),
            r#"<html lang="th"><body></body></html>"#
        );
    }
}
