//! Renderers, one per output style.
//!
//! Every renderer walks the table in the same order (title, header block,
//! body, footer) through the [`Renderer`] trait; the variants differ in how
//! each step is drawn and in how cell content is escaped.

mod html;
mod markdown;
mod terminal;

use std::borrow::Cow;

use crate::layout::ResolvedWidths;
use crate::style::{BorderChars, Style};
use crate::table::Table;

use html::HtmlRenderer;
use markdown::MarkdownRenderer;
use terminal::TerminalRenderer;

/// Drawing steps shared by all output styles.
pub(crate) trait Renderer {
    /// Column widths used by the drawing steps.
    fn layout(&self, table: &Table) -> ResolvedWidths {
        table.column_widths()
    }

    /// Makes cell content safe for the output format.
    fn escape<'a>(&self, content: &'a str) -> Cow<'a, str>;

    fn draw_title(&self, out: &mut String, table: &Table, layout: &ResolvedWidths);

    fn draw_header_block(&self, out: &mut String, table: &Table, layout: &ResolvedWidths);

    fn draw_body_rows(&self, out: &mut String, table: &Table, layout: &ResolvedWidths);

    fn draw_footer(&self, out: &mut String, table: &Table, layout: &ResolvedWidths);

    fn render(&self, table: &Table) -> String {
        let layout = self.layout(table);
        let mut out = String::new();
        self.draw_title(&mut out, table, &layout);
        self.draw_header_block(&mut out, table, &layout);
        self.draw_body_rows(&mut out, table, &layout);
        self.draw_footer(&mut out, table, &layout);
        out
    }
}

/// Renders `table` with the renderer for its current style.
pub(crate) fn render(table: &Table) -> String {
    match table.style() {
        Style::Ascii => TerminalRenderer::new(BorderChars::ASCII).render(table),
        Style::Unicode => TerminalRenderer::new(BorderChars::UNICODE).render(table),
        Style::Markdown => MarkdownRenderer.render(table),
        Style::Html => HtmlRenderer::new(table.html_title_mode()).render(table),
    }
}
