//! Configuration types for loading and rendering xdot scenes.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Which [`LayoutEngine`] lays out plain DOT input.
//! - [`StyleConfig`] - Visual options such as the background color.
//!
//! # Example
//!
//! ```
//! # use xdot::config::AppConfig;
//! # use xdot::engine::LayoutEngine;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().engine(), LayoutEngine::Dot);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use xdot_core::{color::Color, engine::LayoutEngine};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the configured layout engine, keeping everything else.
    pub fn with_layout_engine(mut self, engine: LayoutEngine) -> Self {
        self.layout.engine = engine;
        self
    }
}

/// Layout settings for DOT input that has not been laid out yet.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    engine: LayoutEngine,
}

impl LayoutConfig {
    pub fn new(engine: LayoutEngine) -> Self {
        Self { engine }
    }

    /// Returns the Graphviz engine used to lay out plain DOT.
    pub fn engine(&self) -> LayoutEngine {
        self.engine
    }
}

/// Visual styling configuration for rendered scenes.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            engine = "neato"

            [style]
            background_color = "#fafafa"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().engine(), LayoutEngine::Neato);
        let background = config.style().background_color().unwrap().unwrap();
        assert_eq!(background.to_hex_rgb(), "#fafafa");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().engine(), LayoutEngine::Dot);
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result = toml::from_str::<AppConfig>("[layout]\nengine = \"spring\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::new(Some("not-a-color".to_string()));
        let err = style.background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
    }

    #[test]
    fn test_with_layout_engine() {
        let config = AppConfig::default().with_layout_engine(LayoutEngine::Circo);
        assert_eq!(config.layout().engine(), LayoutEngine::Circo);
    }
}
