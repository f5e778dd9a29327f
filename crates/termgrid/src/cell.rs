//! Cells, rows and per-cell style overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Horizontal alignment of cell content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

impl Align {
    /// The keyword used for this alignment in HTML attributes and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "right" => Ok(Align::Right),
            "center" | "centre" => Ok(Align::Center),
            _ => Err(TableError::UnknownAlign(s.to_string())),
        }
    }
}

/// Per-cell overrides.
///
/// `alignment: None` defers to the column alignment (and then to left).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub alignment: Option<Align>,
    pub col_span: usize,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle {
            alignment: None,
            col_span: 1,
        }
    }
}

/// One unit of table content.
///
/// Content is stored already stringified. Anything that converts into a
/// `Cell` can be handed to [`Table::add_row`](crate::Table::add_row):
///
/// ```rust
/// use termgrid::{Align, Cell};
///
/// let plain = Cell::from("hey");
/// let number = Cell::from(1234);
/// let float = Cell::from(3.1456788);
/// assert_eq!(number.content(), "1234");
/// assert_eq!(float.content(), "3.15");
///
/// let spanning = Cell::new("Sub").span(2).align(Align::Center);
/// assert_eq!(spanning.col_span(), 2);
/// # let _ = plain;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    content: String,
    style: CellStyle,
}

impl Cell {
    /// Creates a cell with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Cell {
            content: content.into(),
            style: CellStyle::default(),
        }
    }

    /// Creates a cell with an explicit style override.
    ///
    /// A span of zero is treated as one.
    pub fn with_style(content: impl Into<String>, style: CellStyle) -> Self {
        Cell {
            content: content.into(),
            style: CellStyle {
                col_span: style.col_span.max(1),
                ..style
            },
        }
    }

    /// Sets the alignment override.
    pub fn align(mut self, align: Align) -> Self {
        self.style.alignment = Some(align);
        self
    }

    /// Sets how many columns this cell occupies.
    pub fn span(mut self, columns: usize) -> Self {
        self.style.col_span = columns.max(1);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn alignment(&self) -> Option<Align> {
        self.style.alignment
    }

    pub fn col_span(&self) -> usize {
        self.style.col_span
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::new(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::new(value.as_str())
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        Cell::new(value.to_string())
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::new(value.to_string())
    }
}

macro_rules! cell_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::new(value.to_string())
                }
            }
        )*
    };
}

cell_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats always show two fractional digits: 3.14 -> "3.14", 3.1456788 -> "3.15".
impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::new(format!("{:.2}", value))
    }
}

impl From<f32> for Cell {
    fn from(value: f32) -> Self {
        Cell::new(format!("{:.2}", value))
    }
}

/// An ordered sequence of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Row {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of columns this row reaches, counting spans.
    pub fn width_in_columns(&self) -> usize {
        self.cells.iter().map(Cell::col_span).sum()
    }

    /// Iterates `(first_column, cell)` pairs, clipping spans to `columns`.
    ///
    /// Cells starting at or past `columns` are skipped; a span crossing the
    /// last column is shortened so that it ends there.
    pub(crate) fn placed(&self, columns: usize) -> impl Iterator<Item = Placed<'_>> {
        let mut next = 0;
        self.cells.iter().filter_map(move |cell| {
            let start = next;
            next += cell.col_span();
            if start >= columns {
                return None;
            }
            Some(Placed {
                cell,
                start,
                span: cell.col_span().min(columns - start),
            })
        })
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Row::new(iter)
    }
}

/// A cell together with the columns it covers in a laid-out row.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placed<'a> {
    pub cell: &'a Cell,
    pub start: usize,
    pub span: usize,
}

/// Builds a `Vec<Cell>` from values of mixed types.
///
/// ```rust
/// use termgrid::{row, Table};
///
/// let mut table = Table::new();
/// table.add_row(row!["ken", 1234]);
/// table.add_row(row!["derek", 3.14]);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Cell::from($value)),*]
    };
}
