use std::io::{self, Write};

use termion::event::Key;

use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::config::Config;
use crate::context::Context;
use crate::events::{Dispatcher, Event};
use crate::grid::DaySlot;
use crate::ui::{modal, month, summary};

const MONTH_ORIGIN: (u16, u16) = (2, 2);
const SUMMARY_ORIGIN: (u16, u16) = (2, 12);
const MODAL_ORIGIN: (u16, u16) = (6, 4);

pub struct App<'a> {
    config: &'a Config,
    context: Context,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, context: Context) -> App<'a> {
        App {
            config,
            context,
            quit: false,
        }
    }

    pub fn run<W: Write>(
        &mut self,
        dispatcher: Dispatcher,
        out: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        while !self.quit {
            self.draw(out)?;

            match dispatcher.next()? {
                Event::Update => self.context.update(),
                Event::Input(key) => {
                    if let Err(err) = self.handle_input(key) {
                        log::debug!("{}", err);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", termion::clear::All)?;

        let (x, y) = MONTH_ORIGIN;
        month::render(out, x, y, &self.context)?;

        let (x, y) = SUMMARY_ORIGIN;
        summary::render(out, x, y, &self.context, self.config)?;

        if let Some(key) = self.context.pending_removal() {
            let (x, y) = MODAL_ORIGIN;
            modal::render(out, x, y, &key)?;
        }

        out.flush()
    }

    fn handle_input(&mut self, key: Key) -> CmdResult {
        // the confirmation prompt is exclusive, everything else waits
        if self.context.pending_removal().is_some() {
            match self.config.key_map.get(&key) {
                Some(Cmd::Confirm) => self.context.confirm_removal(),
                Some(Cmd::Cancel) => self.context.cancel_removal(),
                Some(Cmd::Exit) => self.quit = true,
                _ if key == Key::Esc => self.context.cancel_removal(),
                _ => log::debug!("ignoring {:?} while the prompt is open", key),
            }
            return Ok(Cmd::Noop);
        }

        match self.config.key_map.get(&key) {
            Some(Cmd::NextDay) => self.context.select_next_day(),
            Some(Cmd::PrevDay) => self.context.select_prev_day(),
            Some(Cmd::NextWeek) => self.context.select_next_week(),
            Some(Cmd::PrevWeek) => self.context.select_prev_week(),
            Some(Cmd::NextMonth) => self.context.navigate(1),
            Some(Cmd::PrevMonth) => self.context.navigate(-1),
            Some(Cmd::Today) => self.context.select_today(),
            Some(Cmd::ToggleDinner) => {
                let selected = DaySlot::Day(self.context.selected_day());
                self.context.tap(selected);
            }
            Some(Cmd::Exit) => self.quit = true,
            Some(Cmd::Confirm) | Some(Cmd::Cancel) | Some(Cmd::Noop) => {}
            None => {
                return Err(CmdError::new(format!(
                    "Could not handle input key '{:?}'",
                    key
                )))
            }
        }

        Ok(Cmd::Noop)
    }
}
