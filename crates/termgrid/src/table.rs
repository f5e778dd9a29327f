//! The table aggregate and its builder API.

use std::collections::BTreeMap;
use std::fmt;

use crate::cell::{Align, Cell, Row};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::layout::{resolve_widths, ResolvedWidths};
use crate::render;
use crate::style::{HtmlTitleMode, Style};

/// One entry of the table body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BodyLine {
    Row(Row),
    /// A horizontal rule between body rows (text styles only).
    Separator,
}

/// Which block of the table a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Header,
    Body,
}

/// A table of text cells that renders as ASCII, Unicode box drawing,
/// Markdown or HTML.
///
/// The table is filled through builder calls and rendered with
/// [`render`](Table::render). Rendering only reads the table, so the same
/// state always renders to the same text. Column count and widths are worked
/// out at render time from whatever rows are present.
///
/// # Example
///
/// ```rust
/// use termgrid::{row, Table};
///
/// let mut table = Table::new();
/// table.add_header_row(["Name", "Value"]);
/// table.add_row(row!["hey", "you"]);
/// table.add_row(row!["ken", 1234]);
///
/// assert_eq!(
///     table.render(),
///     "+------+-------+\n\
///      | Name | Value |\n\
///      +------+-------+\n\
///      | hey  | you   |\n\
///      | ken  | 1234  |\n\
///      +------+-------+\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    title: Option<String>,
    header_rows: Vec<Row>,
    body: Vec<BodyLine>,
    column_align: BTreeMap<usize, Align>,
    style: Style,
    html_title_mode: HtmlTitleMode,
}

impl Table {
    /// Creates an empty ASCII table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given style.
    pub fn with_style(style: Style) -> Self {
        Table {
            style,
            ..Self::default()
        }
    }

    /// Sets the title, replacing any previous one.
    pub fn add_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a header row. Multiple header rows stack in insertion order.
    pub fn add_header_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.header_rows.push(Row::new(cells));
        self
    }

    /// Appends a body row.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.body.push(BodyLine::Row(Row::new(cells)));
        self
    }

    /// Appends a horizontal rule between body rows.
    ///
    /// Only the text styles draw it; Markdown and HTML skip it.
    pub fn add_separator(&mut self) -> &mut Self {
        self.body.push(BodyLine::Separator);
        self
    }

    /// Sets the alignment of body cells in `column` (0-based).
    ///
    /// Cells with their own alignment keep it. Header rows are not affected.
    pub fn set_align(&mut self, align: Align, column: usize) -> &mut Self {
        self.column_align.insert(column, align);
        self
    }

    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style;
        self
    }

    /// Selects the style by name (`ascii`, `unicode`, `markdown`, `html`).
    pub fn set_style_name(&mut self, name: &str) -> Result<&mut Self, TableError> {
        let style = name.parse()?;
        Ok(self.set_style(style))
    }

    pub fn set_html_title_mode(&mut self, mode: HtmlTitleMode) -> &mut Self {
        self.html_title_mode = mode;
        self
    }

    /// Applies every option present in `config`.
    pub fn apply_config(&mut self, config: &TableConfig) -> &mut Self {
        if let Some(style) = config.style {
            self.set_style(style);
        }
        if let Some(mode) = config.html_title_mode {
            self.set_html_title_mode(mode);
        }
        for (&column, &align) in &config.align {
            self.set_align(align, column);
        }
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn header_rows(&self) -> &[Row] {
        &self.header_rows
    }

    /// Body rows in order, without separators.
    pub fn body_rows(&self) -> impl Iterator<Item = &Row> {
        self.body.iter().filter_map(|line| match line {
            BodyLine::Row(row) => Some(row),
            BodyLine::Separator => None,
        })
    }

    pub(crate) fn body_lines(&self) -> &[BodyLine] {
        &self.body
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn html_title_mode(&self) -> HtmlTitleMode {
        self.html_title_mode
    }

    /// The alignment override set for `column`, if any.
    pub fn column_alignment(&self, column: usize) -> Option<Align> {
        self.column_align.get(&column).copied()
    }

    /// The highest column any row reaches, counting spans.
    pub fn column_count(&self) -> usize {
        self.header_rows
            .iter()
            .chain(self.body_rows())
            .map(Row::width_in_columns)
            .max()
            .unwrap_or(0)
    }

    /// Content width of every column for the current state, title included.
    pub fn column_widths(&self) -> ResolvedWidths {
        resolve_widths(
            self.column_count(),
            self.header_rows.iter().chain(self.body_rows()),
            self.title(),
        )
    }

    /// Alignment that was asked for explicitly: the cell's own, then the
    /// column's (body rows only).
    pub(crate) fn explicit_alignment(
        &self,
        cell: &Cell,
        column: usize,
        section: Section,
    ) -> Option<Align> {
        cell.alignment().or_else(|| match section {
            Section::Body => self.column_alignment(column),
            Section::Header => None,
        })
    }

    /// Cell override, then column override, then left.
    pub(crate) fn resolve_alignment(&self, cell: &Cell, column: usize, section: Section) -> Align {
        self.explicit_alignment(cell, column, section)
            .unwrap_or_default()
    }

    /// Renders the table in its current style.
    pub fn render(&self) -> String {
        render::render(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
