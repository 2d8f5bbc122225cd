// SPDX-License-Identifier: MPL-2.0
//! Application orchestration.
//!
//! [`App`] owns the startup sequence: fetch content → build the resolver →
//! detect the initial locale → render. The lifecycle is a straight line,
//! `Uninitialized → Loading → Ready` on success or
//! `Uninitialized → Loading → Failed` on a fetch/parse failure. `Failed`
//! is terminal: no retry, no partial render, only the static error view.

use crate::config;
use crate::content::loader;
use crate::i18n::{self, I18n, Locale};
use crate::ui;
use std::path::PathBuf;

/// Command-line flags, resolved before startup.
#[derive(Debug, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub content: Option<String>,
    pub template: Option<String>,
    pub out: Option<String>,
}

/// Where the app is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

pub struct App {
    phase: Phase,
    template: String,
    i18n: Option<I18n>,
}

impl App {
    pub fn new(template: String) -> Self {
        Self {
            phase: Phase::Uninitialized,
            template,
            i18n: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The active locale, once the app is ready.
    pub fn locale(&self) -> Option<Locale> {
        self.i18n.as_ref().map(I18n::locale)
    }

    /// Runs the startup sequence against the content document at
    /// `location`.
    ///
    /// The preference record at `config_path` (platform default when
    /// `None`) is read once, before anything renders. `cli_lang` takes
    /// priority over the detection chain when it names a supported code.
    pub async fn bootstrap(
        &mut self,
        location: &str,
        cli_lang: Option<&str>,
        config_path: Option<PathBuf>,
    ) {
        self.phase = Phase::Loading;

        let document = match loader::fetch(location).await {
            Ok(document) => document,
            Err(err) => {
                self.phase = Phase::Failed(err.to_string());
                return;
            }
        };

        let stored = match &config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default().language,
            None => config::load().unwrap_or_default().language,
        };
        let initial = cli_lang
            .and_then(Locale::from_code)
            .unwrap_or_else(|| i18n::detect(stored.as_deref(), sys_locale::get_locale().as_deref()));

        // The resolver starts on the detection default; set_locale only
        // takes effect (and persists) when the document carries a bundle
        // for the detected locale.
        let mut i18n = I18n::new(document, Locale::ZhTw, config_path);
        i18n.set_locale(initial);

        self.i18n = Some(i18n);
        self.phase = Phase::Ready;
    }

    /// Renders the page for the current phase: the full localized page when
    /// ready, the static error view otherwise.
    pub fn render(&self) -> String {
        match (&self.phase, &self.i18n) {
            (Phase::Ready, Some(i18n)) => ui::render_page(&self.template, i18n),
            (Phase::Failed(message), _) => ui::error_page(message),
            _ => ui::error_page("content has not been loaded"),
        }
    }

    /// Switches the active locale and re-renders everything.
    ///
    /// Only meaningful in `Ready`; in any other phase the switch is ignored
    /// and the current view is returned unchanged. The switch itself obeys
    /// the resolver's silent-no-op rule for unloaded locales.
    pub fn switch_locale(&mut self, locale: Locale) -> String {
        if self.phase == Phase::Ready {
            if let Some(i18n) = self.i18n.as_mut() {
                i18n.set_locale(locale);
            }
        }
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATE: &str = r#"<html lang="en">
<body>
  <div id="language-toggle"></div>
  <h1 data-i18n="hero.title"></h1>
  <div id="commitments-list"></div>
</body>
</html>"#;

    const CONTENT: &str = r#"{
        "en": {
            "hero": {"title": "Run your business on Moonote"},
            "commitments": {"items": [{"title": "Support", "description": "24/7"}]}
        },
        "th": {
            "hero": {"title": "ดำเนินธุรกิจบน Moonote"}
        }
    }"#;

    fn write_fixture(dir: &std::path::Path) -> (String, PathBuf) {
        let content_path = dir.join("content.json");
        fs::write(&content_path, CONTENT).expect("write content fixture");
        (
            content_path.to_string_lossy().into_owned(),
            dir.join("settings.toml"),
        )
    }

    #[tokio::test]
    async fn bootstrap_reaches_ready_and_renders() {
        let temp_dir = tempdir().expect("create temp dir");
        let (location, config_path) = write_fixture(temp_dir.path());

        let mut app = App::new(TEMPLATE.to_string());
        assert_eq!(*app.phase(), Phase::Uninitialized);
        app.bootstrap(&location, Some("en"), Some(config_path)).await;

        assert_eq!(*app.phase(), Phase::Ready);
        assert_eq!(app.locale(), Some(Locale::En));
        let page = app.render();
        assert!(page.contains("Run your business on Moonote"));
        assert!(page.contains("Support"));
    }

    #[tokio::test]
    async fn stored_preference_drives_the_initial_locale() {
        let temp_dir = tempdir().expect("create temp dir");
        let (location, config_path) = write_fixture(temp_dir.path());
        config::save_to_path(
            &config::Config {
                language: Some("th".to_string()),
                content_url: None,
            },
            &config_path,
        )
        .expect("seed preference");

        let mut app = App::new(TEMPLATE.to_string());
        app.bootstrap(&location, None, Some(config_path)).await;

        assert_eq!(app.locale(), Some(Locale::Th));
        assert!(app.render().contains("ดำเนินธุรกิจบน Moonote"));
    }

    #[tokio::test]
    async fn switch_locale_rerenders_and_persists() {
        let temp_dir = tempdir().expect("create temp dir");
        let (location, config_path) = write_fixture(temp_dir.path());

        let mut app = App::new(TEMPLATE.to_string());
        app.bootstrap(&location, Some("en"), Some(config_path.clone())).await;

        let page = app.switch_locale(Locale::Th);
        assert_eq!(app.locale(), Some(Locale::Th));
        assert!(page.contains("ดำเนินธุรกิจบน Moonote"));
        // Commitments are missing from th and fall back to English.
        assert!(page.contains("Support"));

        let saved = config::load_from_path(&config_path).expect("load saved config");
        assert_eq!(saved.language, Some("th".to_string()));
    }

    #[tokio::test]
    async fn switch_to_unloaded_locale_keeps_the_current_view() {
        let temp_dir = tempdir().expect("create temp dir");
        let (location, config_path) = write_fixture(temp_dir.path());

        let mut app = App::new(TEMPLATE.to_string());
        app.bootstrap(&location, Some("en"), Some(config_path)).await;

        // zh-CN is supported but not present in this document.
        app.switch_locale(Locale::ZhCn);
        assert_eq!(app.locale(), Some(Locale::En));
    }

    #[tokio::test]
    async fn fetch_failure_is_terminal_and_shows_the_error_view() {
        let temp_dir = tempdir().expect("create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let mut app = App::new(TEMPLATE.to_string());
        app.bootstrap("/no/such/content.json", None, Some(config_path)).await;

        assert!(matches!(app.phase(), Phase::Failed(_)));
        let page = app.render();
        assert!(page.contains("Error Loading Content"));
        // No region rendering happened.
        assert!(!page.contains("commitments-list"));
        assert_eq!(app.locale(), None);

        // Switching in Failed is a no-op that re-renders the error view.
        let page = app.switch_locale(Locale::En);
        assert!(page.contains("Error Loading Content"));
    }

    #[tokio::test]
    async fn malformed_content_fails_startup() {
        let temp_dir = tempdir().expect("create temp dir");
        let content_path = temp_dir.path().join("content.json");
        fs::write(&content_path, "{not json").expect("write fixture");

        let mut app = App::new(TEMPLATE.to_string());
        app.bootstrap(
            content_path.to_str().unwrap(),
            None,
            Some(temp_dir.path().join("settings.toml")),
        )
        .await;

        match app.phase() {
            Phase::Failed(message) => assert!(message.contains("Malformed content document")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
