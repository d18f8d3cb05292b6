use atlas::domain::config::ClientConfig;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: ClientConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            title: "Atlas of Canada".to_owned(),
            width: 1024.0,
            height: 768.0,
            config: ClientConfig::default(),
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Configuration handed to the view tree through context.
    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Opens the window and blocks until it is closed.
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(title = %self.title, api = %self.config.api.base_url, "Launching desktop window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(self.config).launch(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas::domain::config::StalePolicy;

    #[test]
    fn builder_overrides_defaults() {
        let mut config = ClientConfig::default();
        config.fetch.stale_policy = StalePolicy::Discard;

        let app = DesktopApp::new().with_title("Regions").with_size(640.0, 480.0).with_config(config);

        assert_eq!(app.title(), "Regions");
        assert_eq!(app.config().fetch.stale_policy, StalePolicy::Discard);
    }
}
