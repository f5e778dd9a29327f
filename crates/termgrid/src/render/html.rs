//! HTML `<table>` output.
//!
//! No widths are computed here; the browser lays the table out. Alignment
//! that was asked for explicitly becomes an `align` attribute, spans become
//! `colspan`.

use std::borrow::Cow;
use std::fmt::Write as _;

use super::Renderer;
use crate::cell::Row;
use crate::layout::ResolvedWidths;
use crate::style::HtmlTitleMode;
use crate::table::{BodyLine, Section, Table};

pub(crate) struct HtmlRenderer {
    title_mode: HtmlTitleMode,
}

impl HtmlRenderer {
    pub fn new(title_mode: HtmlTitleMode) -> Self {
        HtmlRenderer { title_mode }
    }

    fn row(&self, out: &mut String, table: &Table, row: &Row, section: Section, columns: usize) {
        let tag = match section {
            Section::Header => "th",
            Section::Body => "td",
        };
        let mut next = 0;

        out.push_str("<tr>");
        for placed in row.placed(columns) {
            out.push('<');
            out.push_str(tag);
            if let Some(align) = table.explicit_alignment(placed.cell, placed.start, section) {
                let _ = write!(out, " align='{}'", align);
            }
            if placed.span > 1 {
                let _ = write!(out, " colspan=\"{}\"", placed.span);
            }
            out.push('>');
            out.push_str(&self.escape(placed.cell.content()));
            let _ = write!(out, "</{}>", tag);
            next = placed.start + placed.span;
        }
        for _ in next..columns {
            let _ = write!(out, "<{tag}></{tag}>");
        }
        out.push_str("</tr>\n");
    }
}

impl Renderer for HtmlRenderer {
    fn layout(&self, _table: &Table) -> ResolvedWidths {
        ResolvedWidths::default()
    }

    fn escape<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if !content.contains(['&', '<', '>', '\'', '"']) {
            return Cow::Borrowed(content);
        }
        let mut escaped = String::with_capacity(content.len() + 8);
        for c in content.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\'' => escaped.push_str("&#39;"),
                '"' => escaped.push_str("&#34;"),
                other => escaped.push(other),
            }
        }
        Cow::Owned(escaped)
    }

    // Opens the table element as well, since the title is the first step.
    fn draw_title(&self, out: &mut String, table: &Table, _layout: &ResolvedWidths) {
        out.push_str("<table class=\"termtable\">\n");
        if table.title().is_none() && table.header_rows().is_empty() {
            return;
        }
        out.push_str("<thead>\n");
        let Some(title) = table.title() else {
            return;
        };
        let title = self.escape(title);
        match self.title_mode {
            HtmlTitleMode::Caption => {
                let _ = writeln!(out, "<caption>{}</caption>", title);
            }
            HtmlTitleMode::ThSpan => {
                let _ = writeln!(
                    out,
                    "<tr><th style=\"text-align: center\" colspan=\"{}\">{}</th></tr>",
                    table.column_count().max(1),
                    title
                );
            }
        }
    }

    fn draw_header_block(&self, out: &mut String, table: &Table, _layout: &ResolvedWidths) {
        if table.title().is_none() && table.header_rows().is_empty() {
            return;
        }
        let columns = table.column_count();
        for row in table.header_rows() {
            self.row(out, table, row, Section::Header, columns);
        }
        out.push_str("</thead>\n");
    }

    fn draw_body_rows(&self, out: &mut String, table: &Table, _layout: &ResolvedWidths) {
        out.push_str("<tbody>\n");
        let columns = table.column_count();
        for line in table.body_lines() {
            if let BodyLine::Row(row) = line {
                self.row(out, table, row, Section::Body, columns);
            }
        }
        out.push_str("</tbody>\n");
    }

    fn draw_footer(&self, out: &mut String, _table: &Table, _layout: &ResolvedWidths) {
        out.push_str("</table>\n");
    }
}
