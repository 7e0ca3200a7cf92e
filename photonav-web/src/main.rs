//! photonav web front end
//!
//! Builds the site configuration from compile-time environment, then
//! launches the Dioxus app with it in context.

use photonav_web::{site_config, App, MisconfiguredApp};

fn main() {
    dioxus::logger::initialize_default();

    match site_config() {
        Ok(config) => {
            tracing::info!(
                "Starting gallery for project {} ({})",
                config.cdn.project_id,
                config.cdn.dataset
            );
            dioxus::LaunchBuilder::new().with_context(config).launch(App);
        }
        Err(e) => {
            tracing::error!("Invalid site configuration: {e}");
            dioxus::launch(MisconfiguredApp);
        }
    }
}
