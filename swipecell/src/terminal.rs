//! Minimal terminal host for the widget: raw mode, mouse capture, buffer
//! diffing. The demo example drives the whole widget through this; library
//! users embedding the cell in their own framework don't need it.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::style::Rgb;

pub struct SwipeTerminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl SwipeTerminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Run one frame: clear, let the caller paint, flush the diff.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_bold = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            queue!(self.stdout, cursor::MoveTo(x, y))?;

            if last_fg != Some(cell.fg) {
                queue!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = Some(cell.bg);
            }
            if cell.bold != last_bold {
                let attr = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attr))?;
                last_bold = cell.bold;
            }

            queue!(self.stdout, Print(cell.ch))?;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for SwipeTerminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
