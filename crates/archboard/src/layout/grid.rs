//! Grid placement of fixed-size boxes inside a parent region.
//!
//! Children are placed row-major: child `i` goes to row `i / columns` and
//! column `i % columns`. The grid never resizes or clips children; when the
//! rows run past the bottom of the parent, the children are still placed and
//! [`GridPlacement::overflows`] reports it. Choosing column counts that keep
//! content inside the parent is the caller's job.

use archboard_core::geometry::{Position, Size};

use crate::error::ArchboardError;

/// Slack allowed before a child counts as overflowing.
const TOLERANCE: f32 = 0.01;

/// How the number of columns is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Columns {
    /// A fixed column count. Zero is a layout error.
    Fixed(usize),
    /// As many columns as fit the parent width, at least one.
    #[default]
    FitWidth,
}

/// Parameters of a grid.
///
/// # Examples
///
/// ```
/// # use archboard::layout::{Columns, GridSpec};
/// # use archboard_core::geometry::{Position, Size};
/// let spec = GridSpec::new(Size::new(100.0, 40.0))
///     .with_columns(Columns::Fixed(2))
///     .with_spacing(10.0, 5.0)
///     .with_margin(0.0);
/// let placement = spec.place(Position::new(0.0, 0.0, 300.0, 200.0), 3).unwrap();
///
/// assert_eq!(placement.rows(), 2);
/// assert_eq!(placement.positions()[2], Position::new(0.0, 45.0, 100.0, 40.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    columns: Columns,
    child: Size,
    spacing_x: f32,
    spacing_y: f32,
    margin: f32,
    title_height: f32,
}

impl GridSpec {
    /// Creates a fit-width grid of `child`-sized boxes with 10 units of
    /// spacing and margin and no title band.
    pub fn new(child: Size) -> Self {
        Self {
            columns: Columns::FitWidth,
            child,
            spacing_x: 10.0,
            spacing_y: 10.0,
            margin: 10.0,
            title_height: 0.0,
        }
    }

    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_spacing(mut self, spacing_x: f32, spacing_y: f32) -> Self {
        self.spacing_x = spacing_x;
        self.spacing_y = spacing_y;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Reserves a band at the top of the parent, below the margin, for a
    /// title.
    pub fn with_title_height(mut self, title_height: f32) -> Self {
        self.title_height = title_height;
        self
    }

    pub fn child(&self) -> Size {
        self.child
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Resolves the column count for a parent region.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Layout`] for `Columns::Fixed(0)`, or for a
    /// fit-width grid whose child width plus spacing is not positive.
    pub fn columns_for(&self, parent: Position) -> Result<usize, ArchboardError> {
        match self.columns {
            Columns::Fixed(0) => Err(ArchboardError::Layout(
                "grid requires at least one column".to_string(),
            )),
            Columns::Fixed(columns) => Ok(columns),
            Columns::FitWidth => {
                let pitch = self.child.width() + self.spacing_x;
                if !(pitch.is_finite() && pitch > 0.0) {
                    return Err(ArchboardError::Layout(format!(
                        "grid child width {} with spacing {} cannot fill a row",
                        self.child.width(),
                        self.spacing_x
                    )));
                }
                let available = parent.width() - 2.0 * self.margin + self.spacing_x;
                let fit = (available / pitch).floor();
                Ok(if fit.is_finite() && fit >= 1.0 {
                    fit as usize
                } else {
                    1
                })
            }
        }
    }

    /// Places `count` children inside `parent`.
    ///
    /// `count == 0` yields an empty placement; whether an empty parent is
    /// still drawn is up to the caller.
    ///
    /// # Errors
    ///
    /// See [`GridSpec::columns_for`].
    pub fn place(&self, parent: Position, count: usize) -> Result<GridPlacement, ArchboardError> {
        let columns = self.columns_for(parent)?;
        let rows = count.div_ceil(columns);

        let origin_x = parent.x() + self.margin;
        let origin_y = parent.y() + self.margin + self.title_height;
        let positions = (0..count)
            .map(|i| {
                let (row, col) = (i / columns, i % columns);
                Position::new(
                    origin_x + col as f32 * (self.child.width() + self.spacing_x),
                    origin_y + row as f32 * (self.child.height() + self.spacing_y),
                    self.child.width(),
                    self.child.height(),
                )
            })
            .collect();

        Ok(GridPlacement {
            columns,
            rows,
            margin: self.margin,
            positions,
        })
    }

    /// Returns the height a parent needs to hold `rows` rows, including the
    /// title band and both margins.
    pub fn height_for_rows(&self, rows: usize) -> f32 {
        let content = if rows == 0 {
            0.0
        } else {
            rows as f32 * self.child.height() + (rows - 1) as f32 * self.spacing_y
        };
        2.0 * self.margin + self.title_height + content
    }
}

/// The result of placing children on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlacement {
    columns: usize,
    rows: usize,
    margin: f32,
    positions: Vec<Position>,
}

impl GridPlacement {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Child positions, in input order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the `(row, column)` cell of child `index`.
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.positions.len()).then(|| (index / self.columns, index % self.columns))
    }

    /// Returns `true` if any child extends past the parent's inner bounds
    /// (the parent inset by the margin on the right and bottom).
    pub fn overflows(&self, parent: Position) -> bool {
        let right = parent.right() - self.margin;
        let bottom = parent.bottom() - self.margin;
        self.positions
            .iter()
            .any(|child| child.right() > right + TOLERANCE || child.bottom() > bottom + TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_fit_width_column_count() {
        let spec = GridSpec::new(Size::new(140.0, 45.0)).with_spacing(20.0, 15.0);
        // (1000 - 20 + 20) / 160 = 6.25
        let columns = spec
            .columns_for(Position::new(0.0, 0.0, 1000.0, 500.0))
            .unwrap();
        assert_eq!(columns, 6);
    }

    #[test]
    fn test_fit_width_narrow_parent_uses_one_column() {
        let spec = GridSpec::new(Size::new(300.0, 45.0));
        let columns = spec
            .columns_for(Position::new(0.0, 0.0, 50.0, 500.0))
            .unwrap();
        assert_eq!(columns, 1);
    }

    #[test]
    fn test_zero_columns_is_layout_error() {
        let spec = GridSpec::new(Size::new(10.0, 10.0)).with_columns(Columns::Fixed(0));
        let result = spec.place(Position::new(0.0, 0.0, 100.0, 100.0), 3);
        assert!(matches!(result, Err(ArchboardError::Layout(_))));
    }

    #[test]
    fn test_degenerate_pitch_is_layout_error() {
        let spec = GridSpec::new(Size::new(0.0, 10.0)).with_spacing(0.0, 0.0);
        assert!(spec.columns_for(Position::new(0.0, 0.0, 100.0, 100.0)).is_err());
    }

    #[test]
    fn test_origins_include_margin_and_title() {
        let spec = GridSpec::new(Size::new(100.0, 40.0))
            .with_columns(Columns::Fixed(3))
            .with_spacing(10.0, 20.0)
            .with_margin(5.0)
            .with_title_height(25.0);
        let parent = Position::new(50.0, 60.0, 400.0, 300.0);
        let placement = spec.place(parent, 5).unwrap();

        assert_eq!(placement.rows(), 2);
        assert_eq!(placement.positions()[0], Position::new(55.0, 90.0, 100.0, 40.0));
        assert_eq!(placement.positions()[2], Position::new(275.0, 90.0, 100.0, 40.0));
        assert_eq!(placement.positions()[4], Position::new(165.0, 150.0, 100.0, 40.0));
        assert_eq!(placement.cell_of(4), Some((1, 1)));
        assert_eq!(placement.cell_of(5), None);
    }

    #[test]
    fn test_empty_placement() {
        let spec = GridSpec::new(Size::new(100.0, 40.0));
        let placement = spec.place(Position::new(0.0, 0.0, 400.0, 300.0), 0).unwrap();
        assert!(placement.is_empty());
        assert_eq!(placement.rows(), 0);
        assert!(!placement.overflows(Position::new(0.0, 0.0, 400.0, 300.0)));
    }

    #[test]
    fn test_overflow_is_reported_not_prevented() {
        let spec = GridSpec::new(Size::new(100.0, 40.0)).with_columns(Columns::Fixed(1));
        let parent = Position::new(0.0, 0.0, 120.0, 100.0);
        let placement = spec.place(parent, 4).unwrap();

        assert_eq!(placement.len(), 4);
        assert!(placement.overflows(parent));
        assert!(placement.positions()[3].bottom() > parent.bottom());
    }

    #[test]
    fn test_height_for_rows() {
        let spec = GridSpec::new(Size::new(100.0, 40.0))
            .with_spacing(10.0, 15.0)
            .with_margin(10.0)
            .with_title_height(20.0);
        assert_approx_eq!(f32, spec.height_for_rows(0), 40.0);
        assert_approx_eq!(f32, spec.height_for_rows(2), 40.0 + 95.0);
    }

    proptest! {
        #[test]
        fn fixed_grid_cells_are_unique_and_bounded(
            count in 0usize..200,
            columns in 1usize..12,
        ) {
            let spec = GridSpec::new(Size::new(50.0, 20.0)).with_columns(Columns::Fixed(columns));
            let placement = spec.place(Position::new(0.0, 0.0, 800.0, 600.0), count).unwrap();
            let rows = count.div_ceil(columns);

            prop_assert_eq!(placement.len(), count);
            prop_assert_eq!(placement.rows(), rows);

            let mut cells = HashSet::new();
            for index in 0..count {
                let (row, col) = placement.cell_of(index).unwrap();
                prop_assert!(row < rows);
                prop_assert!(col < columns);
                prop_assert!(cells.insert((row, col)));
            }

            let origins: HashSet<_> = placement
                .positions()
                .iter()
                .map(|p| (p.x().to_bits(), p.y().to_bits()))
                .collect();
            prop_assert_eq!(origins.len(), count);
        }

        #[test]
        fn fit_width_rows_fit_horizontally(
            count in 1usize..60,
            width in 1.0f32..200.0,
            parent_width in 220.0f32..2000.0,
        ) {
            let spec = GridSpec::new(Size::new(width, 20.0));
            let parent = Position::new(0.0, 0.0, parent_width, 10_000.0);
            let placement = spec.place(parent, count).unwrap();

            prop_assert!(placement.columns() >= 1);
            for child in placement.positions() {
                prop_assert!(child.right() <= parent.right() - spec.margin() + 1e-2);
            }
        }
    }
}
