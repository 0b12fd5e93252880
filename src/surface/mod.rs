//! Presentation surfaces.
//!
//! A surface is acquired for one render call and released when dropped, so
//! the terminal is restored on every exit path. [`HeadlessSurface`] stands in
//! for the terminal in tests and non-interactive runs.

mod headless;
mod terminal;

pub use headless::HeadlessSurface;
pub use terminal::TerminalSurface;

use crate::chart::Figure;
use crate::error::Result;

/// Something that can show a finished figure to the user.
pub trait Presenter {
    /// Draw the figure and hand it to the user.
    ///
    /// Interactive surfaces block until the user closes the figure.
    fn present(&mut self, figure: &Figure) -> Result<()>;
}
