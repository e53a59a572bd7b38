//! Color palettes and the shared drawing definitions derived from them.
//!
//! Panels never hard-code colors; they ask the [`Theme`] for a swatch (layer,
//! rating, phase status) or for a ready-made definition (panel frame, title,
//! body text, badge).

use serde::Deserialize;

use archboard_core::draw::{
    ArrowDefinition, ArrowHead, ArrowStyle, FontStyle, HorizontalAlign, RectangleDefinition,
    StrokeDefinition, TextDefinition, VerticalAlign,
};

use crate::{
    config::StyleConfig,
    error::ArchboardError,
    schema::{Layer, PhaseStatus, Rating},
};

/// Selects one of the built-in palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Corporate,
    Monochrome,
}

/// A fill/stroke/font color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub font: &'static str,
}

impl Swatch {
    const fn new(fill: &'static str, stroke: &'static str, font: &'static str) -> Self {
        Self { fill, stroke, font }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    page: &'static str,
    panel: Swatch,
    header: Swatch,
    footer: Swatch,
    title: &'static str,
    text: &'static str,
    muted: &'static str,
    badge: Swatch,
    connector: &'static str,
    track: &'static str,
    layers: [Swatch; 6],
    other_layer: Swatch,
    ratings: [Swatch; 4],
    phases: [Swatch; 4],
}

const CORPORATE: Palette = Palette {
    page: "#ffffff",
    panel: Swatch::new("#f8f9fb", "#c9d1dc", "#1f2a37"),
    header: Swatch::new("#1f3a5f", "#1f3a5f", "#ffffff"),
    footer: Swatch::new("#eef1f5", "#c9d1dc", "#5b6776"),
    title: "#1f3a5f",
    text: "#1f2a37",
    muted: "#8592a3",
    badge: Swatch::new("#e3ecf7", "#8fb0d6", "#1f3a5f"),
    connector: "#4a5568",
    track: "#e2e8f0",
    layers: [
        Swatch::new("#fff2cc", "#d6b656", "#5c4a00"),
        Swatch::new("#dae8fc", "#6c8ebf", "#1f3a5f"),
        Swatch::new("#d5e8d4", "#82b366", "#24461e"),
        Swatch::new("#e1d5e7", "#9673a6", "#3d2a48"),
        Swatch::new("#ffe6cc", "#d79b00", "#5a3a00"),
        Swatch::new("#f8cecc", "#b85450", "#4d1a18"),
    ],
    other_layer: Swatch::new("#f5f5f5", "#666666", "#333333"),
    ratings: [
        Swatch::new("#d5e8d4", "#82b366", "#24461e"),
        Swatch::new("#fff2cc", "#d6b656", "#5c4a00"),
        Swatch::new("#ffe6cc", "#d79b00", "#5a3a00"),
        Swatch::new("#f8cecc", "#b85450", "#4d1a18"),
    ],
    phases: [
        Swatch::new("#f5f5f5", "#999999", "#333333"),
        Swatch::new("#dae8fc", "#6c8ebf", "#1f3a5f"),
        Swatch::new("#d5e8d4", "#82b366", "#24461e"),
        Swatch::new("#f8cecc", "#b85450", "#4d1a18"),
    ],
};

const MONOCHROME: Palette = Palette {
    page: "#ffffff",
    panel: Swatch::new("#ffffff", "#999999", "#000000"),
    header: Swatch::new("#333333", "#333333", "#ffffff"),
    footer: Swatch::new("#f2f2f2", "#999999", "#555555"),
    title: "#000000",
    text: "#222222",
    muted: "#888888",
    badge: Swatch::new("#eeeeee", "#999999", "#222222"),
    connector: "#333333",
    track: "#eeeeee",
    layers: [
        Swatch::new("#fafafa", "#444444", "#000000"),
        Swatch::new("#f0f0f0", "#444444", "#000000"),
        Swatch::new("#e6e6e6", "#444444", "#000000"),
        Swatch::new("#dcdcdc", "#444444", "#000000"),
        Swatch::new("#d2d2d2", "#444444", "#000000"),
        Swatch::new("#c8c8c8", "#444444", "#000000"),
    ],
    other_layer: Swatch::new("#ffffff", "#444444", "#000000"),
    ratings: [
        Swatch::new("#f2f2f2", "#666666", "#000000"),
        Swatch::new("#d9d9d9", "#666666", "#000000"),
        Swatch::new("#a6a6a6", "#333333", "#000000"),
        Swatch::new("#595959", "#000000", "#ffffff"),
    ],
    phases: [
        Swatch::new("#ffffff", "#666666", "#000000"),
        Swatch::new("#e6e6e6", "#444444", "#000000"),
        Swatch::new("#bfbfbf", "#333333", "#000000"),
        Swatch::new("#595959", "#000000", "#ffffff"),
    ],
};

/// The resolved visual theme for one build.
#[derive(Debug, Clone)]
pub struct Theme {
    name: ThemeName,
    palette: Palette,
    font_family: Option<String>,
    connector_style: ArrowStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let palette = match name {
            ThemeName::Corporate => CORPORATE,
            ThemeName::Monochrome => MONOCHROME,
        };
        Self {
            name,
            palette,
            font_family: None,
            connector_style: ArrowStyle::default(),
        }
    }

    /// Resolves the theme described by a style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Config`] for an unknown connector style.
    pub fn from_config(config: &StyleConfig) -> Result<Self, ArchboardError> {
        let mut theme = Self::new(config.theme());
        theme.font_family = config.font_family().map(str::to_string);
        theme.connector_style = config.connector_style()?;
        Ok(theme)
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn page_color(&self) -> &'static str {
        self.palette.page
    }

    pub fn layer_swatch(&self, layer: &Layer) -> Swatch {
        layer
            .rank()
            .map_or(self.palette.other_layer, |rank| self.palette.layers[rank])
    }

    pub fn rating_swatch(&self, rating: Rating) -> Swatch {
        self.palette.ratings[rating as usize]
    }

    pub fn phase_swatch(&self, status: PhaseStatus) -> Swatch {
        self.palette.phases[status as usize]
    }

    pub fn header_swatch(&self) -> Swatch {
        self.palette.header
    }

    pub fn footer_swatch(&self) -> Swatch {
        self.palette.footer
    }

    /// Neutral swatch for tiles and badges that carry no rating.
    pub fn badge_swatch(&self) -> Swatch {
        self.palette.badge
    }

    /// Full-width strip such as the header and footer bars.
    pub fn strip(&self, swatch: Swatch) -> RectangleDefinition {
        RectangleDefinition::new()
            .with_fill_color(swatch.fill)
            .with_stroke(StrokeDefinition::solid(swatch.stroke, 1.0))
    }

    /// Text drawn on a strip, left aligned.
    pub fn strip_text(&self, swatch: Swatch, font_size: u16, font_style: FontStyle) -> TextDefinition {
        self.with_font(
            TextDefinition::new()
                .with_font_size(font_size)
                .with_font_style(font_style)
                .with_font_color(swatch.font)
                .with_align(HorizontalAlign::Left, VerticalAlign::Middle),
        )
    }

    /// Outline of a layer lane in the components panel.
    pub fn lane(&self, swatch: Swatch) -> RectangleDefinition {
        RectangleDefinition::new()
            .with_fill_color(self.palette.page)
            .with_stroke(StrokeDefinition::dashed(swatch.stroke, 1.0))
    }

    fn with_font(&self, text: TextDefinition) -> TextDefinition {
        let mut text = text;
        if let Some(family) = &self.font_family {
            text.set_font_family(Some(family.clone()));
        }
        text
    }

    /// Panel background frame.
    pub fn panel_frame(&self) -> RectangleDefinition {
        RectangleDefinition::new()
            .with_fill_color(self.palette.panel.fill)
            .with_stroke(StrokeDefinition::solid(self.palette.panel.stroke, 1.0))
            .with_rounded(true)
            .with_corner_radius(4)
    }

    /// Panel title, bold and left aligned.
    pub fn panel_title(&self) -> TextDefinition {
        self.with_font(
            TextDefinition::new()
                .with_font_size(14)
                .with_font_style(FontStyle::BOLD)
                .with_font_color(self.palette.title)
                .with_align(HorizontalAlign::Left, VerticalAlign::Middle),
        )
    }

    /// Body text, left and top aligned.
    pub fn body_text(&self) -> TextDefinition {
        self.with_font(
            TextDefinition::new()
                .with_font_size(11)
                .with_font_color(self.palette.text)
                .with_align(HorizontalAlign::Left, VerticalAlign::Top),
        )
    }

    /// Bold label, used for sub-headings within a panel.
    pub fn label_text(&self) -> TextDefinition {
        self.with_font(
            TextDefinition::new()
                .with_font_size(11)
                .with_font_style(FontStyle::BOLD)
                .with_font_color(self.palette.title)
                .with_align(HorizontalAlign::Left, VerticalAlign::Middle),
        )
    }

    /// Placeholder text for empty sections.
    pub fn muted_text(&self) -> TextDefinition {
        self.with_font(
            TextDefinition::new()
                .with_font_size(11)
                .with_font_style(FontStyle::ITALIC)
                .with_font_color(self.palette.muted)
                .with_align(HorizontalAlign::Left, VerticalAlign::Top),
        )
    }

    /// A filled box in the given swatch with a centered label.
    pub fn swatch_box(&self, swatch: Swatch, font_size: u16) -> RectangleDefinition {
        RectangleDefinition::new()
            .with_fill_color(swatch.fill)
            .with_stroke(StrokeDefinition::solid(swatch.stroke, 1.0))
            .with_rounded(true)
            .with_text(self.with_font(
                TextDefinition::new()
                    .with_font_size(font_size)
                    .with_font_color(swatch.font),
            ))
    }

    /// Small rounded badge for tags, roles and technologies.
    pub fn badge(&self) -> RectangleDefinition {
        self.swatch_box(self.palette.badge, 10)
            .with_corner_radius(40)
    }

    /// Square table cell with a thin border.
    pub fn table_cell(&self, header: bool) -> RectangleDefinition {
        let (fill, style) = if header {
            (self.palette.badge.fill, FontStyle::BOLD)
        } else {
            (self.palette.page, FontStyle::NORMAL)
        };
        RectangleDefinition::new()
            .with_fill_color(fill)
            .with_stroke(StrokeDefinition::solid(self.palette.panel.stroke, 1.0))
            .with_text(self.with_font(
                TextDefinition::new()
                    .with_font_size(10)
                    .with_font_style(style)
                    .with_font_color(self.palette.text)
                    .with_align(HorizontalAlign::Left, VerticalAlign::Middle),
            ))
    }

    /// Unfilled background track of a proportional bar.
    pub fn bar_track(&self) -> RectangleDefinition {
        RectangleDefinition::new()
            .with_fill_color(self.palette.track)
            .with_stroke(StrokeDefinition::none())
    }

    /// Filled portion of a proportional bar.
    pub fn bar_fill(&self, index: usize) -> RectangleDefinition {
        let swatch = self.palette.layers[index % self.palette.layers.len()];
        RectangleDefinition::new()
            .with_fill_color(swatch.stroke)
            .with_stroke(StrokeDefinition::none())
    }

    /// Connector between components; dashed for asynchronous links.
    pub fn connector(&self, asynchronous: bool) -> ArrowDefinition {
        let stroke = if asynchronous {
            StrokeDefinition::dashed(self.palette.connector, 1.5)
        } else {
            StrokeDefinition::solid(self.palette.connector, 1.5)
        };
        ArrowDefinition::new(stroke)
            .with_style(self.connector_style)
            .with_head(if asynchronous {
                ArrowHead::Open
            } else {
                ArrowHead::Classic
            })
            .with_text(self.with_font(
                TextDefinition::new()
                    .with_font_size(9)
                    .with_font_color(self.palette.text),
            ))
    }

    /// Arrow between consecutive timeline phases.
    pub fn chevron(&self) -> ArrowDefinition {
        ArrowDefinition::new(StrokeDefinition::solid(self.palette.muted, 2.0))
            .with_head(ArrowHead::Block)
    }
}
