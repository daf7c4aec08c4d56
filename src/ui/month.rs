use std::io::{self, Write};

use itertools::Itertools;
use termion::{color, cursor, style};

use crate::context::Context;
use crate::grid::{DaySlot, COLUMNS};

const CELL_WIDTH: u16 = 5;
const WEEKDAYS: [&str; COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render<W: Write>(out: &mut W, x: u16, y: u16, context: &Context) -> io::Result<()> {
    write!(
        out,
        "{}{}{}{}",
        cursor::Goto(x, y),
        style::Bold,
        context.month_label(),
        style::Reset
    )?;
    write!(
        out,
        "{}{} dinners this month",
        cursor::Goto(x, y + 1),
        context.monthly_count()
    )?;

    for (col, name) in WEEKDAYS.iter().enumerate() {
        write!(
            out,
            "{}{}{}{}",
            cursor::Goto(x + col as u16 * CELL_WIDTH, y + 2),
            color::Fg(color::Yellow),
            name,
            color::Fg(color::Reset)
        )?;
    }

    let grid = context.grid();
    let weeks = grid.iter().chunks(COLUMNS);

    for (row, week) in (&weeks).into_iter().enumerate() {
        for (col, slot) in week.enumerate() {
            if let DaySlot::Day(day) = slot {
                draw_cell(
                    out,
                    x + col as u16 * CELL_WIDTH,
                    y + 3 + row as u16,
                    *day,
                    context,
                )?;
            }
        }
    }

    Ok(())
}

fn draw_cell<W: Write>(out: &mut W, x: u16, y: u16, day: u32, context: &Context) -> io::Result<()> {
    let key = context.key_for(day);
    let marked = context.is_marked(&key);

    write!(out, "{}", cursor::Goto(x, y))?;

    if context.selected_day() == day {
        write!(out, "{}", style::Invert)?;
    }

    if marked {
        write!(out, "{}", color::Fg(color::Green))?;
    } else if context.is_today(&key) {
        write!(out, "{}", color::Fg(color::Blue))?;
    }

    write!(out, "{:>3}{}", day, if marked { '*' } else { ' ' })?;
    write!(out, "{}{}", color::Fg(color::Reset), style::Reset)
}
