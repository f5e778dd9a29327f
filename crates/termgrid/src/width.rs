//! Display-width measurement and padding for table cells.
//!
//! Cell content may carry terminal escape sequences (SGR colors, bold, ...).
//! Those sequences are kept verbatim in the rendered output but contribute
//! nothing to the measured width. Every remaining character is measured on its
//! own: East Asian Wide and Fullwidth characters take two columns, everything
//! else printable takes one, and zero-width characters take none.
//!
//! Characters are never grouped into grapheme clusters. A base letter followed
//! by a combining mark is measured as two independent characters, which is the
//! same result a plain per-character terminal width table gives.

use console::strip_ansi_codes;
use unicode_width::UnicodeWidthChar;

/// Returns the number of terminal columns `s` occupies.
///
/// # Example
///
/// ```rust
/// use termgrid::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("精钢"), 4);
/// assert_eq!(display_width("€27"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    if s.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        return s.len();
    }
    strip_ansi_codes(s)
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Pads `s` on the right (left-aligns) to reach `width` columns.
///
/// Content wider than `width` is returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    push_spaces(&mut out, fill);
    out
}

/// Pads `s` on the left (right-aligns) to reach `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    push_spaces(&mut out, fill);
    out.push_str(s);
    out
}

/// Centers `s` within `width` columns.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// ```rust
/// use termgrid::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    let mut out = String::with_capacity(s.len() + fill);
    push_spaces(&mut out, left);
    out.push_str(s);
    push_spaces(&mut out, fill - left);
    out
}

pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
