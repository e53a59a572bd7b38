//! Configuration types for Archboard diagram assembly.
//!
//! This module provides configuration structures that control the page, the
//! visual theme, build behavior and custom layout templates. All types
//! implement [`serde::Deserialize`] for loading from external sources; every
//! field has a default, so an empty configuration is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`PageConfig`] - Page size and document name.
//! - [`StyleConfig`] - Theme, font family and connector style.
//! - [`BuildConfig`] - Default template and overlap checking.
//! - [`TemplateConfig`] - A custom layout template.
//!
//! # Example
//!
//! ```
//! # use archboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.build().default_template(), "standard");
//! assert!(config.style().connector_style().is_ok());
//! ```

use std::str::FromStr;

use serde::Deserialize;

use archboard_core::{draw::ArrowStyle, geometry::Size};

use crate::{error::ArchboardError, theme::ThemeName};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    page: PageConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    build: BuildConfig,

    /// Custom layout templates, in addition to the built-in ones.
    #[serde(default)]
    templates: Vec<TemplateConfig>,
}

impl AppConfig {
    pub fn new(
        page: PageConfig,
        style: StyleConfig,
        build: BuildConfig,
        templates: Vec<TemplateConfig>,
    ) -> Self {
        Self {
            page,
            style,
            build,
            templates,
        }
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn build(&self) -> &BuildConfig {
        &self.build
    }

    pub fn templates(&self) -> &[TemplateConfig] {
        &self.templates
    }
}

/// Page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Page width in document units.
    #[serde(default = "default_page_width")]
    width: f32,

    /// Page height in document units.
    #[serde(default = "default_page_height")]
    height: f32,

    /// Fallback diagram name when the data has no title.
    #[serde(default = "default_page_name")]
    name: String,
}

fn default_page_width() -> f32 {
    1920.0
}

fn default_page_height() -> f32 {
    1080.0
}

fn default_page_name() -> String {
    "Architecture Overview".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: default_page_width(),
            height: default_page_height(),
            name: default_page_name(),
        }
    }
}

impl PageConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Returns the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Config`] if either dimension is not a
    /// positive finite number.
    pub fn size(&self) -> Result<Size, ArchboardError> {
        let valid = |value: f32| value.is_finite() && value > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(Size::new(self.width, self.height))
        } else {
            Err(ArchboardError::Config(format!(
                "page size must be positive, got {}x{}",
                self.width, self.height
            )))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Visual styling configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    theme: ThemeName,

    /// Font family applied to all text. Viewer default when unset.
    #[serde(default)]
    font_family: Option<String>,

    /// Path style of connectors: `straight`, `curved` or `orthogonal`.
    #[serde(default)]
    connector_style: Option<String>,
}

impl StyleConfig {
    pub fn new(theme: ThemeName) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the parsed connector style.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Config`] if the configured name is unknown.
    pub fn connector_style(&self) -> Result<ArrowStyle, ArchboardError> {
        self.connector_style
            .as_deref()
            .map(ArrowStyle::from_str)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| ArchboardError::Config(format!("Invalid connector style in config: {err}")))
    }
}

/// Build behavior configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Template used when neither the caller nor the data names one.
    #[serde(default = "default_template")]
    default_template: String,

    /// Detect and report overlapping template regions.
    #[serde(default = "default_true")]
    check_overlaps: bool,
}

fn default_template() -> String {
    "standard".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            check_overlaps: true,
        }
    }
}

impl BuildConfig {
    pub fn default_template(&self) -> &str {
        &self.default_template
    }

    pub fn check_overlaps(&self) -> bool {
        self.check_overlaps
    }
}

/// A custom layout template: a name and an ordered list of slots.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    name: String,

    #[serde(default)]
    slots: Vec<SlotConfig>,
}

impl TemplateConfig {
    pub fn new(name: impl Into<String>, slots: Vec<SlotConfig>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[SlotConfig] {
        &self.slots
    }
}

/// One slot of a custom template: a panel kind name and its region.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotConfig {
    panel: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl SlotConfig {
    pub fn new(panel: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            panel: panel.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn panel(&self) -> &str {
        &self.panel
    }

    /// Returns the region as `(x, y, width, height)`.
    pub fn region(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        let size = config.page().size().unwrap();
        assert_eq!(size, Size::new(1920.0, 1080.0));
        assert_eq!(config.style().theme(), ThemeName::Corporate);
        assert!(config.build().check_overlaps());
        assert!(config.templates().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [page]
            width = 1280
            height = 720

            [style]
            theme = "monochrome"
            font_family = "Helvetica"
            connector_style = "orthogonal"

            [build]
            default_template = "technical"
            check_overlaps = false

            [[templates]]
            name = "compact"
            slots = [
                { panel = "header", x = 0, y = 0, width = 1280, height = 60 },
                { panel = "components", x = 0, y = 60, width = 1280, height = 600 },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.page().size().unwrap(), Size::new(1280.0, 720.0));
        assert_eq!(config.style().theme(), ThemeName::Monochrome);
        assert_eq!(config.style().font_family(), Some("Helvetica"));
        assert_eq!(config.style().connector_style().unwrap(), ArrowStyle::Orthogonal);
        assert_eq!(config.build().default_template(), "technical");
        assert!(!config.build().check_overlaps());
        assert_eq!(config.templates()[0].name(), "compact");
        assert_eq!(config.templates()[0].slots()[1].region(), (0.0, 60.0, 1280.0, 600.0));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let config: AppConfig = toml::from_str(
            r#"
            [page]
            width = 0
            [style]
            connector_style = "zigzag"
            "#,
        )
        .unwrap();

        assert!(matches!(config.page().size(), Err(ArchboardError::Config(_))));
        assert!(matches!(
            config.style().connector_style(),
            Err(ArchboardError::Config(_))
        ));
    }
}
