//! # termgrid - Aligned, Bordered Tables
//!
//! `termgrid` renders tabular data as text. A [`Table`] collects an optional
//! title, any number of header rows and body rows, and renders them in one of
//! four [`Style`]s:
//!
//! - [`Style::Ascii`]: `+`, `-` and `|` borders
//! - [`Style::Unicode`]: light box drawing with rounded corners
//! - [`Style::Markdown`]: pipe tables
//! - [`Style::Html`]: a `<table>` element
//!
//! Column widths are measured in terminal columns, not bytes or chars:
//! escape sequences (colors, bold, ...) are passed through but count as zero
//! width, and East Asian wide characters count as two.
//!
//! ## Quick Start
//!
//! ```rust
//! use termgrid::{row, Align, Table};
//!
//! let mut table = Table::new();
//! table.add_title("Example");
//! table.add_header_row(["Name", "Value"]);
//! table.add_row(row!["hey", "you"]);
//! table.add_row(row!["ken", 1234]);
//! table.add_row(row!["derek", 3.14]);
//! table.set_align(Align::Right, 1);
//!
//! assert_eq!(
//!     table.render(),
//!     "\
//! +---------------+
//! |    Example    |
//! +-------+-------+
//! | Name  | Value |
//! +-------+-------+
//! | hey   |   you |
//! | ken   |  1234 |
//! | derek |  3.14 |
//! +-------+-------+
//! "
//! );
//! ```
//!
//! ## Spanning Cells
//!
//! ```rust
//! use termgrid::{row, Cell, Style, Table};
//!
//! let mut table = Table::with_style(Style::Unicode);
//! table.add_header_row(["Name", "Value"]);
//! table.add_header_row([Cell::new("Sub").span(2)]);
//! table.add_row(row!["hey", "you"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "\
//! ╭──────┬───────╮
//! │ Name │ Value │
//! │ Sub          │
//! ├──────┼───────┤
//! │ hey  │ you   │
//! ╰──────┴───────╯
//! "
//! );
//! ```
//!
//! Rendering never mutates the table: calling [`Table::render`] twice without
//! changes in between gives identical output.

mod cell;
mod config;
mod error;
mod layout;
mod render;
mod style;
mod table;
mod width;

pub use cell::{Align, Cell, CellStyle, Row};
pub use config::TableConfig;
pub use error::TableError;
pub use layout::{resolve_widths, ResolvedWidths, CELL_PADDING, COLUMN_SEPARATOR_WIDTH};
pub use style::{HtmlTitleMode, Style};
pub use table::Table;
pub use width::{display_width, pad_center, pad_left, pad_right};
