//! Output styles and their border glyph themes.
//!
//! A [`Style`] is the single switch that picks a renderer. The two text
//! styles also carry a glyph table; Markdown and HTML have no borders of
//! their own. Glyphs are looked up from the style on every render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Output style of a rendered table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// ASCII borders: `+`, `-`, `|`.
    #[default]
    Ascii,
    /// Light Unicode box drawing with rounded corners: `╭`, `─`, `┬`, `│`, `┤`, `╯`.
    #[serde(alias = "utf8")]
    Unicode,
    /// Pipe table Markdown.
    Markdown,
    /// An HTML `<table>` element.
    Html,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Ascii => "ascii",
            Style::Unicode => "unicode",
            Style::Markdown => "markdown",
            Style::Html => "html",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" | "terminal" => Ok(Style::Ascii),
            "unicode" | "utf8" | "utf-8" | "box" => Ok(Style::Unicode),
            "markdown" | "md" => Ok(Style::Markdown),
            "html" => Ok(Style::Html),
            _ => Err(TableError::UnknownStyle(s.to_string())),
        }
    }
}

/// How an HTML table presents its title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HtmlTitleMode {
    /// `<caption>title</caption>`
    #[default]
    Caption,
    /// A heading row with a single `<th>` spanning every column.
    ThSpan,
}

impl FromStr for HtmlTitleMode {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caption" => Ok(HtmlTitleMode::Caption),
            "th-span" | "th_span" | "thspan" => Ok(HtmlTitleMode::ThSpan),
            _ => Err(TableError::UnknownTitleMode(s.to_string())),
        }
    }
}

/// Box-drawing characters for a text style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BorderChars {
    pub const ASCII: BorderChars = BorderChars {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        left_t: '+',
        cross: '+',
        right_t: '+',
        top_t: '+',
        bottom_t: '+',
    };

    pub const UNICODE: BorderChars = BorderChars {
        horizontal: '─',
        vertical: '│',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        left_t: '├',
        cross: '┼',
        right_t: '┤',
        top_t: '┬',
        bottom_t: '┴',
    };

    /// Returns `(left, joint, right)` for a horizontal rule.
    ///
    /// `joint` is `None` for rules that run unbroken across the full width.
    pub fn rule(&self, kind: RuleKind) -> (char, Option<char>, char) {
        match kind {
            RuleKind::Top => (self.top_left, Some(self.top_t), self.top_right),
            RuleKind::TitleTop => (self.top_left, None, self.top_right),
            RuleKind::UnderTitle => (self.left_t, Some(self.top_t), self.right_t),
            RuleKind::Middle => (self.left_t, Some(self.cross), self.right_t),
            RuleKind::Bottom => (self.bottom_left, Some(self.bottom_t), self.bottom_right),
            RuleKind::TitleBottom => (self.bottom_left, None, self.bottom_right),
        }
    }
}

/// Position of a horizontal rule within a text table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RuleKind {
    /// First line of a table without a title.
    Top,
    /// First line of a title box.
    TitleTop,
    /// Between the title box and the first row.
    UnderTitle,
    /// Around the header block and at explicit separators.
    Middle,
    /// Last line of a table.
    Bottom,
    /// Last line of a table that has a title but no columns.
    TitleBottom,
}
