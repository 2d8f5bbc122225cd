// SPDX-License-Identifier: MPL-2.0
use moonote_site::app::{App, Flags, Phase};
use moonote_site::config;
use moonote_site::error::Result;
use std::fs;

const DEFAULT_CONTENT: &str = "data/content.json";
const DEFAULT_TEMPLATE: &str = include_str!("../assets/index.html");

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        content: args.opt_value_from_str("--content").unwrap(),
        template: args.opt_value_from_str("--template").unwrap(),
        out: args.opt_value_from_str("--out").unwrap(),
    };

    let settings = config::load().unwrap_or_default();
    let location = flags
        .content
        .or(settings.content_url)
        .unwrap_or_else(|| DEFAULT_CONTENT.to_string());
    let template = match &flags.template {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut app = App::new(template);
    app.bootstrap(&location, flags.lang.as_deref(), None).await;
    let page = app.render();

    match &flags.out {
        Some(path) => fs::write(path, &page)?,
        None => print!("{}", page),
    }

    match app.phase() {
        Phase::Failed(message) => {
            eprintln!("Failed to initialize site: {}", message);
            std::process::exit(1);
        }
        _ => {
            if let (Some(path), Some(locale)) = (&flags.out, app.locale()) {
                println!("✓ Moonote site rendered to {} ({})", path, locale);
            }
        }
    }

    Ok(())
}
