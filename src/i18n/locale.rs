// SPDX-License-Identifier: MPL-2.0
//! Supported locales and the startup detection policy.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// One of the four languages the site ships in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    ZhTw,
    ZhCn,
    Th,
}

/// Every supported locale, in toggle display order.
pub const SUPPORTED: [Locale; 4] = [Locale::En, Locale::ZhTw, Locale::ZhCn, Locale::Th];

impl Locale {
    /// Fallback target when a translation is missing in the active locale.
    pub const FALLBACK: Locale = Locale::En;

    /// The locale code as it appears in the content document and the
    /// preference record.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh-TW",
            Locale::ZhCn => "zh-CN",
            Locale::Th => "th",
        }
    }

    /// Native-language label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhTw => "繁體中文",
            Locale::ZhCn => "简体中文",
            Locale::Th => "ไทย",
        }
    }

    /// Parses an exact locale code, as stored in the preference record.
    pub fn from_code(code: &str) -> Option<Locale> {
        SUPPORTED.iter().copied().find(|l| l.code() == code)
    }

    /// Maps an environment language tag (e.g. `en-US`, `zh-Hant-HK`) onto a
    /// supported locale, if any applies.
    pub fn from_env_tag(tag: &str) -> Option<Locale> {
        let id: LanguageIdentifier = tag.trim().parse().ok()?;
        let script = id.script.as_ref().map(|s| s.as_str());
        let region = id.region.as_ref().map(|r| r.as_str());
        match id.language.as_str() {
            "en" => Some(Locale::En),
            "th" => Some(Locale::Th),
            "zh" => match (script, region) {
                (Some("Hant"), _) | (None, Some("TW")) => Some(Locale::ZhTw),
                (Some("Hans"), _) | (None, Some("CN")) => Some(Locale::ZhCn),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Picks the initial locale. Runs once at startup, first match wins.
pub fn detect(stored: Option<&str>, env_tag: Option<&str>) -> Locale {
    // 1. Check the stored preference
    if let Some(code) = stored {
        if let Some(locale) = Locale::from_code(code) {
            return locale;
        }
    }

    // 2. Check the environment's reported language
    if let Some(tag) = env_tag {
        if let Some(locale) = Locale::from_env_tag(tag) {
            return locale;
        }
    }

    // 3. Default to Traditional Chinese
    Locale::ZhTw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in SUPPORTED {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn from_code_requires_exact_match() {
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code("zh"), None);
        assert_eq!(Locale::from_code("EN"), None);
    }

    #[test]
    fn env_tag_prefix_matches_english_and_thai() {
        assert_eq!(Locale::from_env_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_env_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_env_tag("th-TH"), Some(Locale::Th));
    }

    #[test]
    fn env_tag_maps_chinese_variants() {
        assert_eq!(Locale::from_env_tag("zh-TW"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_env_tag("zh-Hant-HK"), Some(Locale::ZhTw));
        assert_eq!(Locale::from_env_tag("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_env_tag("zh-Hans-SG"), Some(Locale::ZhCn));
        // Bare `zh` picks nothing and falls through to the default.
        assert_eq!(Locale::from_env_tag("zh"), None);
    }

    #[test]
    fn env_tag_rejects_unsupported_languages() {
        assert_eq!(Locale::from_env_tag("fr-FR"), None);
        assert_eq!(Locale::from_env_tag(""), None);
        assert_eq!(Locale::from_env_tag("not a tag"), None);
    }

    #[test]
    fn stored_preference_wins_over_environment() {
        assert_eq!(detect(Some("th"), Some("en-US")), Locale::Th);
    }

    #[test]
    fn environment_used_when_no_stored_preference() {
        assert_eq!(detect(None, Some("zh-Hant-HK")), Locale::ZhTw);
    }

    #[test]
    fn unsupported_environment_falls_back_to_traditional_chinese() {
        assert_eq!(detect(None, Some("fr-FR")), Locale::ZhTw);
        assert_eq!(detect(None, None), Locale::ZhTw);
    }

    #[test]
    fn invalid_stored_preference_falls_through() {
        assert_eq!(detect(Some("de"), Some("en-GB")), Locale::En);
    }
}
