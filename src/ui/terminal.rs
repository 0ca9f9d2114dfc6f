//! Terminal session lifecycle.
//!
//! Raw mode and the alternate screen are entered on construction and restored
//! on drop, so an error path cannot leave the user's shell in a broken state.
//! The composer places the hardware cursor itself during rendering, so the
//! session leaves cursor management entirely to the draw cycle.

use anyhow::Result;
use ratatui::{DefaultTerminal, Frame};

pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
