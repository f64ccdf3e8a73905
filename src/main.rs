use leptos::prelude::*;
use mausami_portfolio::{logging, App, SITE_TOML};
use portfolio_core::{site_config_or_default, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let level = parsed.as_ref().map(|c| c.logging.level).unwrap_or_default();
    logging::init(level).expect("error initializing logger");

    // Logged here so a broken site.toml shows up in the console
    let config = site_config_or_default(parsed);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
