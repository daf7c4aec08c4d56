use std::io::{self, Write};

use termion::{cursor, style};

use crate::datetime::DateKey;

/// Confirmation prompt for a queued removal, drawn over the grid. While it
/// is visible all input except confirm/cancel/quit is ignored.
pub fn render<W: Write>(out: &mut W, x: u16, y: u16, key: &DateKey) -> io::Result<()> {
    let message = format!("Remove dinner on {}?", key);
    let choices = "[y]es    [n]o";
    let width = message.len().max(choices.len()) + 4;

    write!(out, "{}┌{}┐", cursor::Goto(x, y), "─".repeat(width))?;
    write!(out, "{}│{:^w$}│", cursor::Goto(x, y + 1), "", w = width)?;
    write!(
        out,
        "{}│{}{:^w$}{}│",
        cursor::Goto(x, y + 2),
        style::Bold,
        message,
        style::Reset,
        w = width
    )?;
    write!(out, "{}│{:^w$}│", cursor::Goto(x, y + 3), choices, w = width)?;
    write!(out, "{}└{}┘", cursor::Goto(x, y + 4), "─".repeat(width))
}
