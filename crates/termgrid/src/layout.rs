//! Column width resolution.
//!
//! Widths are content widths: they exclude the one-space padding on each side
//! of a cell and the border glyphs. In the text styles adjacent columns are
//! separated by `" | "`, so a cell spanning `k` columns gets the combined
//! width of those columns plus `3 * (k - 1)`.
//!
//! Resolution runs in three passes:
//!
//! 1. Every single-column cell raises its column to its display width
//!    (never below 1).
//! 2. Every spanning cell whose columns are still too narrow spreads the
//!    shortfall evenly over them, the remainder going to the last one.
//! 3. A title wider than the table widens the last column.

use crate::cell::Row;
use crate::width::display_width;

/// Spaces on each side of cell content.
pub const CELL_PADDING: usize = 1;

/// Width of the gap between two columns: padding, glyph, padding.
pub const COLUMN_SEPARATOR_WIDTH: usize = 2 * CELL_PADDING + 1;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Content width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Content width of a field covering `span` columns from `start`.
    pub fn span_width(&self, start: usize, span: usize) -> usize {
        let end = (start + span).min(self.widths.len());
        if start >= end {
            return 0;
        }
        let covered: usize = self.widths[start..end].iter().sum();
        covered + (end - start - 1) * COLUMN_SEPARATOR_WIDTH
    }

    /// Width between the outer border glyphs of a text table.
    pub fn inner_width(&self) -> usize {
        if self.widths.is_empty() {
            return 0;
        }
        self.span_width(0, self.widths.len()) + 2 * CELL_PADDING
    }
}

/// A spanning cell's demand on a run of columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SpanConstraint {
    start: usize,
    span: usize,
    width: usize,
}

/// Computes one content width per column.
///
/// `rows` should yield header rows first and then body rows; spanning
/// constraints are satisfied in that order, which keeps the result
/// deterministic.
pub fn resolve_widths<'a, I>(columns: usize, rows: I, title: Option<&str>) -> ResolvedWidths
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut widths = vec![1; columns];
    let mut spans = Vec::new();

    for row in rows {
        for placed in row.placed(columns) {
            let width = display_width(placed.cell.content());
            if placed.span == 1 {
                widths[placed.start] = widths[placed.start].max(width);
            } else {
                spans.push(SpanConstraint {
                    start: placed.start,
                    span: placed.span,
                    width,
                });
            }
        }
    }

    let mut resolved = ResolvedWidths { widths };

    for constraint in spans {
        let available = resolved.span_width(constraint.start, constraint.span);
        if constraint.width <= available {
            continue;
        }
        let shortfall = constraint.width - available;
        let share = shortfall / constraint.span;
        let last = constraint.start + constraint.span - 1;
        for width in &mut resolved.widths[constraint.start..=last] {
            *width += share;
        }
        resolved.widths[last] += shortfall % constraint.span;
        tracing::debug!(
            start = constraint.start,
            span = constraint.span,
            shortfall,
            "widened columns under spanning cell"
        );
    }

    if let Some(title) = title {
        let needed = display_width(title) + 2 * CELL_PADDING;
        let inner = resolved.inner_width();
        if let Some(last) = resolved.widths.last_mut() {
            if inner < needed {
                *last += needed - inner;
                tracing::debug!(deficit = needed - inner, "title widened last column");
            }
        }
    }

    tracing::trace!(widths = ?resolved.widths, "resolved column widths");
    resolved
}
