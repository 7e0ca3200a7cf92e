pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::{Gallery, ProductDetail, SiteLayout};
use photonav_common::{CdnImageResolver, ConfigError, SiteConfig};
use photonav_ui::{ErrorDisplay, ImageUrls};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Gallery {},
    #[route("/products/:slug")]
    ProductDetail { slug: String },
}

/// Site configuration, baked in at compile time.
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_lookup(|key| {
        let value = match key {
            "PHOTONAV_PROJECT_ID" => option_env!("PHOTONAV_PROJECT_ID"),
            "PHOTONAV_DATASET" => option_env!("PHOTONAV_DATASET"),
            "PHOTONAV_CDN_BASE" => option_env!("PHOTONAV_CDN_BASE"),
            "PHOTONAV_PHOTOS_URL" => option_env!("PHOTONAV_PHOTOS_URL"),
            "PHOTONAV_PRODUCTS_URL" => option_env!("PHOTONAV_PRODUCTS_URL"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// Root component. Expects a `SiteConfig` in context.
#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    use_context_provider(move || ImageUrls::new(CdnImageResolver::new(config.cdn)));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

/// Rendered instead of the site when configuration is invalid.
#[component]
pub fn MisconfiguredApp() -> Element {
    let message = match site_config() {
        Ok(_) => "Configuration changed, reload the page.".to_string(),
        Err(e) => format!("This site is not configured: {e}"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen flex items-center justify-center",
            ErrorDisplay { message }
        }
    }
}
