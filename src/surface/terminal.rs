//! Interactive terminal surface.

use super::Presenter;
use crate::chart::Figure;
use crate::error::{Result, SplineViewError};
use crate::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Stdout};

/// Full-screen terminal surface; restores the terminal when dropped.
#[derive(Debug)]
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSurface {
    /// Take over the terminal (raw mode + alternate screen).
    pub fn open() -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(SplineViewError::Terminal(
                "stdout is not a terminal (use --headless)".to_string(),
            ));
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err.into());
            }
        };

        let mut surface = Self { terminal };
        surface.terminal.hide_cursor()?;
        tracing::debug!("Terminal surface opened");
        Ok(surface)
    }

    fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Presenter for TerminalSurface {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        loop {
            self.terminal.draw(|f| ui::draw(f, figure))?;

            // Resize and other events fall through to a redraw
            if let Event::Key(key) = event::read()? {
                if closes_figure(&key) {
                    tracing::debug!("Figure closed by {:?}", key.code);
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        match self.restore() {
            Ok(()) => tracing::debug!("Terminal surface closed"),
            Err(err) => tracing::warn!("Failed to restore terminal: {}", err),
        }
    }
}

fn closes_figure(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(
        (key.modifiers, key.code),
        (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::NONE, KeyCode::Enter)
            | (KeyModifiers::CONTROL, KeyCode::Char('c'))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_keys() {
        let press = |modifiers, code| KeyEvent::new(code, modifiers);
        assert!(closes_figure(&press(KeyModifiers::NONE, KeyCode::Char('q'))));
        assert!(closes_figure(&press(KeyModifiers::NONE, KeyCode::Esc)));
        assert!(closes_figure(&press(KeyModifiers::NONE, KeyCode::Enter)));
        assert!(closes_figure(&press(KeyModifiers::CONTROL, KeyCode::Char('c'))));
        assert!(!closes_figure(&press(KeyModifiers::NONE, KeyCode::Char('x'))));
    }

    #[test]
    fn key_release_does_not_close() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(!closes_figure(&key));
    }
}
