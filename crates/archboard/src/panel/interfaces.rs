//! Interface catalog table.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput, framed, placeholder},
    schema::Interface,
    theme::Theme,
};

const ROW_HEIGHT: f32 = 22.0;
/// Column titles and their share of the table width.
const COLUMNS: [(&str, f32); 3] = [("ID", 0.20), ("Flow", 0.55), ("Protocol", 0.25)];

/// One row per interface under a header row.
///
/// When the rows do not fit, the last visible row is replaced by a
/// `+N more` row counting the interfaces left out.
pub struct InterfacesPanel<'a> {
    interfaces: &'a [Interface],
    theme: &'a Theme,
}

impl<'a> InterfacesPanel<'a> {
    pub fn new(interfaces: &'a [Interface], theme: &'a Theme) -> Self {
        Self { interfaces, theme }
    }

    fn row(
        &self,
        builder: &mut CellBuilder,
        area: Position,
        values: [&str; 3],
        header: bool,
        output: &mut PanelOutput,
    ) {
        let definition = self.theme.table_cell(header);
        let mut rest = area;
        for ((_, share), value) in COLUMNS.iter().zip(values) {
            let (cell, remaining) = rest.split_left(area.width() * share);
            rest = remaining;
            output.add(
                RenderLayer::Content,
                builder.labeled_rectangle(cell, value, &definition),
            );
        }
    }
}

fn flow(interface: &Interface) -> String {
    format!("{} → {}", interface.source, interface.target)
}

fn protocol(interface: &Interface) -> String {
    let protocol = interface.protocol.as_deref().unwrap_or("n/a");
    if interface.asynchronous {
        format!("{protocol} (async)")
    } else {
        protocol.to_string()
    }
}

impl Panel for InterfacesPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Interfaces
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Interfaces", &mut output);

        if self.interfaces.is_empty() {
            placeholder(
                builder,
                self.theme,
                content,
                "No interfaces defined",
                &mut output,
            );
            return Ok(output);
        }

        let (header, mut body) = content.split_top(ROW_HEIGHT);
        self.row(
            builder,
            header,
            COLUMNS.map(|(title, _)| title),
            true,
            &mut output,
        );

        let capacity = (body.height() / ROW_HEIGHT).floor() as usize;
        let visible = if self.interfaces.len() > capacity {
            capacity.saturating_sub(1)
        } else {
            self.interfaces.len()
        };

        for interface in &self.interfaces[..visible] {
            let (row, rest) = body.split_top(ROW_HEIGHT);
            body = rest;
            let (flow, protocol) = (flow(interface), protocol(interface));
            self.row(
                builder,
                row,
                [interface.id.as_str(), flow.as_str(), protocol.as_str()],
                false,
                &mut output,
            );
        }

        let hidden = self.interfaces.len() - visible;
        if hidden > 0 && capacity > 0 {
            let (row, _) = body.split_top(ROW_HEIGHT);
            output.add(
                RenderLayer::Content,
                builder.labeled_rectangle(
                    row,
                    &format!("+{hidden} more"),
                    &self.theme.table_cell(false),
                ),
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{panel::test_support::*, record::Record};

    fn interfaces(count: usize) -> Vec<Interface> {
        (0..count)
            .map(|i| {
                Interface::from_record(
                    &Record::new()
                        .with("id", format!("IF-{i}"))
                        .with("source", "orders")
                        .with("target", "billing")
                        .with("protocol", "REST"),
                )
            })
            .collect()
    }

    #[test]
    fn test_table_rows() {
        let interfaces = interfaces(2);
        let theme = Theme::default();
        let cells = render_cells(
            &InterfacesPanel::new(&interfaces, &theme),
            Position::new(980.0, 620.0, 920.0, 200.0),
        );

        let values = values(&cells);
        assert_eq!(
            &values[..7],
            &["ID", "Flow", "Protocol", "IF-0", "orders → billing", "REST", "IF-1"]
        );
        // Frame, title, header row and two rows of three cells.
        assert_eq!(cells.len(), 11);
    }

    #[test]
    fn test_overflowing_rows_are_truncated() {
        let interfaces = interfaces(20);
        let theme = Theme::default();
        // Content height 200 - 38 = 162: header plus six rows.
        let cells = render_cells(
            &InterfacesPanel::new(&interfaces, &theme),
            Position::new(0.0, 0.0, 600.0, 200.0),
        );

        let values = values(&cells);
        assert!(values.contains(&"IF-4".to_string()));
        assert!(!values.contains(&"IF-5".to_string()));
        assert!(values.contains(&"+15 more".to_string()));
        let more = cells
            .iter()
            .find(|cell| cell.value().as_str() == "+15 more")
            .and_then(|cell| cell.position())
            .unwrap();
        assert_eq!(more.width(), 580.0);
        assert!(more.bottom() <= 190.0);
    }

    #[test]
    fn test_async_protocol_is_marked() {
        let interface = Interface::from_record(
            &Record::new()
                .with("source", "a")
                .with("target", "b")
                .with("protocol", "AMQP"),
        );
        assert_eq!(protocol(&interface), "AMQP (async)");
    }

    #[test]
    fn test_empty_catalog_placeholder() {
        let theme = Theme::default();
        let cells = render_cells(
            &InterfacesPanel::new(&[], &theme),
            Position::new(0.0, 0.0, 600.0, 200.0),
        );
        assert_eq!(values(&cells), vec!["Interfaces", "No interfaces defined"]);
    }
}
