use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use tracing::debug;

/// Source of raw key presses for the key probe
pub trait KeySource {
    /// Block until the next key press and return it
    fn next_key(&mut self) -> Result<KeyEvent>;

    /// Called before the first key is read
    fn begin_capture(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once probing is over, even if reading failed
    fn end_capture(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Reads key presses from the terminal in raw mode
#[derive(Debug, Default)]
pub struct TerminalKeys {
    raw: bool,
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }

    fn begin_capture(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable terminal raw mode")?;
        self.raw = true;
        debug!("Raw mode enabled");
        Ok(())
    }

    fn end_capture(&mut self) -> Result<()> {
        if self.raw {
            terminal::disable_raw_mode().context("Failed to disable terminal raw mode")?;
            self.raw = false;
            debug!("Raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
