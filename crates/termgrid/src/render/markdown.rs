//! Markdown pipe tables.
//!
//! ```text
//! Table: Example
//!
//! | Name  | Value |
//! | ----- | ----- |
//! | hey   | you   |
//! ```
//!
//! Cells are padded to the column width measured on the raw content, which
//! keeps source columns lined up for plain text while leaving escaped pipes
//! readable. Markdown has no spans, so a spanning cell is followed by empty
//! cells for the columns it covers.

use std::borrow::Cow;

use super::Renderer;
use crate::cell::Row;
use crate::layout::{resolve_widths, ResolvedWidths};
use crate::table::{BodyLine, Table};
use crate::width::{display_width, push_spaces};

pub(crate) struct MarkdownRenderer;

impl MarkdownRenderer {
    fn cell(&self, out: &mut String, content: &str, width: usize) {
        out.push(' ');
        out.push_str(&self.escape(content));
        push_spaces(out, width.saturating_sub(display_width(content)));
        out.push_str(" |");
    }

    fn row(&self, out: &mut String, row: &Row, layout: &ResolvedWidths) {
        let columns = layout.len();
        let mut next = 0;

        out.push('|');
        for placed in row.placed(columns) {
            self.cell(out, placed.cell.content(), layout.widths[placed.start]);
            for column in placed.start + 1..placed.start + placed.span {
                self.cell(out, "", layout.widths[column]);
            }
            next = placed.start + placed.span;
        }
        for &width in &layout.widths[next.min(columns)..] {
            self.cell(out, "", width);
        }
        out.push('\n');
    }

    fn delimiter(&self, out: &mut String, layout: &ResolvedWidths) {
        out.push('|');
        for &width in &layout.widths {
            out.push(' ');
            out.extend(std::iter::repeat_n('-', width));
            out.push_str(" |");
        }
        out.push('\n');
    }
}

impl Renderer for MarkdownRenderer {
    // The title sits outside the table, so it never widens a column.
    fn layout(&self, table: &Table) -> ResolvedWidths {
        resolve_widths(
            table.column_count(),
            table.header_rows().iter().chain(table.body_rows()),
            None,
        )
    }

    fn escape<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if content.contains('|') {
            Cow::Owned(content.replace('|', "&#x7c;"))
        } else {
            Cow::Borrowed(content)
        }
    }

    fn draw_title(&self, out: &mut String, table: &Table, _layout: &ResolvedWidths) {
        if let Some(title) = table.title() {
            out.push_str("Table: ");
            out.push_str(title);
            out.push_str("\n\n");
        }
    }

    fn draw_header_block(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        if layout.is_empty() {
            return;
        }
        let mut headers = table.header_rows().iter();
        match headers.next() {
            Some(first) => self.row(out, first, layout),
            None => self.row(out, &Row::default(), layout),
        }
        self.delimiter(out, layout);
        for row in headers {
            self.row(out, row, layout);
        }
    }

    fn draw_body_rows(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        for line in table.body_lines() {
            if let BodyLine::Row(row) = line {
                self.row(out, row, layout);
            }
        }
    }

    fn draw_footer(&self, _out: &mut String, _table: &Table, _layout: &ResolvedWidths) {}
}
