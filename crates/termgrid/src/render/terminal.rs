//! Bordered text tables (ASCII and Unicode box drawing).

use std::borrow::Cow;

use super::Renderer;
use crate::cell::{Align, Row};
use crate::layout::{ResolvedWidths, CELL_PADDING};
use crate::style::{BorderChars, RuleKind};
use crate::table::{BodyLine, Section, Table};
use crate::width::{display_width, pad_center, pad_left, pad_right, push_spaces};

pub(crate) struct TerminalRenderer {
    chars: BorderChars,
}

impl TerminalRenderer {
    pub fn new(chars: BorderChars) -> Self {
        TerminalRenderer { chars }
    }

    /// Rule drawn above the first row.
    fn opening_rule(table: &Table) -> RuleKind {
        if table.title().is_some() {
            RuleKind::UnderTitle
        } else {
            RuleKind::Top
        }
    }

    /// Draws a horizontal rule followed by a newline.
    ///
    /// Rules without a joint glyph run unbroken across `inner` columns.
    fn rule(&self, out: &mut String, kind: RuleKind, layout: &ResolvedWidths, inner: usize) {
        let (left, joint, right) = self.chars.rule(kind);
        let horizontal = self.chars.horizontal;
        out.push(left);
        match joint {
            None => out.extend(std::iter::repeat_n(horizontal, inner)),
            Some(joint) => {
                for (i, &width) in layout.widths.iter().enumerate() {
                    if i > 0 {
                        out.push(joint);
                    }
                    out.extend(std::iter::repeat_n(horizontal, width + 2 * CELL_PADDING));
                }
            }
        }
        out.push(right);
        out.push('\n');
    }

    /// Draws one row, merging spanned columns and filling missing ones.
    fn row(
        &self,
        out: &mut String,
        table: &Table,
        row: &Row,
        section: Section,
        layout: &ResolvedWidths,
    ) {
        let vertical = self.chars.vertical;
        let columns = layout.len();
        let mut next = 0;

        out.push(vertical);
        for placed in row.placed(columns) {
            let field = layout.span_width(placed.start, placed.span);
            let content = self.escape(placed.cell.content());
            let aligned = match table.resolve_alignment(placed.cell, placed.start, section) {
                Align::Left => pad_right(&content, field),
                Align::Right => pad_left(&content, field),
                Align::Center => pad_center(&content, field),
            };
            push_spaces(out, CELL_PADDING);
            out.push_str(&aligned);
            push_spaces(out, CELL_PADDING);
            out.push(vertical);
            next = placed.start + placed.span;
        }
        if row.width_in_columns() > columns {
            tracing::debug!(
                columns,
                reached = row.width_in_columns(),
                "dropped cells past the last column"
            );
        }
        for &width in &layout.widths[next.min(columns)..] {
            push_spaces(out, width + 2 * CELL_PADDING);
            out.push(vertical);
        }
        out.push('\n');
    }
}

impl Renderer for TerminalRenderer {
    fn escape<'a>(&self, content: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(content)
    }

    fn draw_title(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        let Some(title) = table.title() else {
            return;
        };
        let inner = if layout.is_empty() {
            display_width(title) + 2 * CELL_PADDING
        } else {
            layout.inner_width()
        };
        let vertical = self.chars.vertical;

        self.rule(out, RuleKind::TitleTop, layout, inner);
        out.push(vertical);
        push_spaces(out, CELL_PADDING);
        out.push_str(&pad_center(&self.escape(title), inner - 2 * CELL_PADDING));
        push_spaces(out, CELL_PADDING);
        out.push(vertical);
        out.push('\n');
    }

    fn draw_header_block(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        if table.header_rows().is_empty() || layout.is_empty() {
            return;
        }
        self.rule(out, Self::opening_rule(table), layout, 0);
        for row in table.header_rows() {
            self.row(out, table, row, Section::Header, layout);
        }
        if !table.body_lines().is_empty() {
            self.rule(out, RuleKind::Middle, layout, 0);
        }
    }

    fn draw_body_rows(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        if table.body_lines().is_empty() || layout.is_empty() {
            return;
        }
        if table.header_rows().is_empty() {
            self.rule(out, Self::opening_rule(table), layout, 0);
        }
        for line in table.body_lines() {
            match line {
                BodyLine::Row(row) => self.row(out, table, row, Section::Body, layout),
                BodyLine::Separator => self.rule(out, RuleKind::Middle, layout, 0),
            }
        }
    }

    fn draw_footer(&self, out: &mut String, table: &Table, layout: &ResolvedWidths) {
        if !layout.is_empty() {
            self.rule(out, RuleKind::Bottom, layout, 0);
        } else if let Some(title) = table.title() {
            let inner = display_width(title) + 2 * CELL_PADDING;
            self.rule(out, RuleKind::TitleBottom, layout, inner);
        }
    }
}
