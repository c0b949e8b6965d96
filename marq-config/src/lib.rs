//! Shared configuration loader for the marq toolchain.
//!
//! `defaults/marq.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`MarqConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use marq_render::surfaces::html::{HtmlOptions, HtmlTheme};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/marq.default.toml");

/// Top-level configuration consumed by marq applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarqConfig {
    pub render: RenderConfig,
    pub inspect: InspectConfig,
}

/// Surface-specific render knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: HtmlThemeConfig,
    /// Optional path to a CSS file appended after the baseline and theme.
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HtmlThemeConfig {
    #[serde(rename = "modern")]
    Modern,
    #[serde(rename = "serif")]
    Serif,
}

impl From<HtmlThemeConfig> for HtmlTheme {
    fn from(config: HtmlThemeConfig) -> Self {
        match config {
            HtmlThemeConfig::Modern => HtmlTheme::Modern,
            HtmlThemeConfig::Serif => HtmlTheme::Serif,
        }
    }
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        // The custom CSS path is resolved by the caller; only the theme maps
        // directly onto render options.
        HtmlOptions::new(config.theme.into())
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub tokens: TokenInspectConfig,
    pub treeviz: TreevizInspectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInspectConfig {
    pub include_literals: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizInspectConfig {
    pub max_label_length: usize,
    pub show_index: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarqConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarqConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.html.theme, HtmlThemeConfig::Modern);
        assert!(config.render.html.custom_css.is_none());
        assert!(config.inspect.tokens.include_literals);
        assert_eq!(config.inspect.treeviz.max_label_length, 30);
        assert!(!config.inspect.treeviz.show_index);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.html.theme", "serif")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.html.theme, HtmlThemeConfig::Serif);
    }

    #[test]
    fn html_config_converts_to_render_options() {
        let config = Loader::new()
            .set_override("render.html.theme", "serif")
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options: HtmlOptions = (&config.render.html).into();
        assert_eq!(options.theme, HtmlTheme::Serif);
        assert!(options.custom_css.is_none());
    }
}
