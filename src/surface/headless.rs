//! Off-screen surface backed by ratatui's test backend.

use super::Presenter;
use crate::chart::Figure;
use crate::error::Result;
use crate::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Renders into an in-memory buffer instead of the terminal.
#[derive(Debug)]
pub struct HeadlessSurface {
    terminal: Terminal<TestBackend>,
    presented: usize,
}

impl HeadlessSurface {
    /// Create a surface of `width` x `height` cells.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(TestBackend::new(width, height))?,
            presented: 0,
        })
    }

    /// Cells of the last presented figure.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Number of figures presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Last presented figure as plain text, one line per row.
    pub fn to_text(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                let row: String = (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                row.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Presenter for HeadlessSurface {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        self.terminal.draw(|f| ui::draw(f, figure))?;
        self.presented += 1;
        tracing::debug!("Figure rendered off-screen");
        Ok(())
    }
}
