use std::io::{self, Write};

use termion::{color, cursor};

use crate::config::Config;
use crate::context::Context;

pub fn render<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    context: &Context,
    config: &Config,
) -> io::Result<()> {
    write!(
        out,
        "{}This month: {} dinners, total {}{} @ {}{} per dinner",
        cursor::Goto(x, y),
        context.monthly_count(),
        config.currency,
        context.monthly_cost(),
        config.currency,
        context.cost_per_dinner(),
    )?;

    write!(
        out,
        "{}{}12*{} dinner taken   {}12{} today",
        cursor::Goto(x, y + 2),
        color::Fg(color::Green),
        color::Fg(color::Reset),
        color::Fg(color::Blue),
        color::Fg(color::Reset),
    )?;

    write!(
        out,
        "{}space marks a dinner, hjkl move, H/L change month, q quits",
        cursor::Goto(x, y + 3)
    )
}
