//! Full-width provenance strip.

use archboard_core::{
    builder::CellBuilder,
    draw::{FontStyle, RenderLayer},
    geometry::{Insets, Position},
};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput},
    schema::DocumentMeta,
    theme::Theme,
};

const SEPARATOR: &str = "  |  ";

pub struct FooterPanel<'a> {
    meta: &'a DocumentMeta,
    theme: &'a Theme,
}

impl<'a> FooterPanel<'a> {
    pub fn new(meta: &'a DocumentMeta, theme: &'a Theme) -> Self {
        Self { meta, theme }
    }

    /// Generator first, then whichever of version, author, source and date
    /// are known.
    fn line(&self) -> String {
        let meta = self.meta;
        let mut parts = vec![format!("Generated by {}", meta.generator)];
        parts.extend(meta.version.as_ref().map(|v| format!("Version {v}")));
        parts.extend(meta.author.as_ref().map(|a| format!("Author: {a}")));
        parts.extend(meta.source.as_ref().map(|s| format!("Source: {s}")));
        parts.extend(meta.date.clone());
        parts.join(SEPARATOR)
    }
}

impl Panel for FooterPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Footer
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let swatch = self.theme.footer_swatch();

        output.add(
            RenderLayer::Background,
            builder.rectangle(position, &self.theme.strip(swatch)),
        );
        output.add(
            RenderLayer::Text,
            builder.text(
                position.inset(Insets::symmetric(0.0, 20.0)),
                &self.line(),
                &self.theme.strip_text(swatch, 11, FontStyle::NORMAL),
            ),
        );

        Ok(output)
    }
}
