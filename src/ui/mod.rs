//! User interface rendering.

mod figure_view;

use crate::chart::Figure;
use ratatui::Frame;

pub use figure_view::centered_fixed_rect;

/// Draw the figure.
pub fn draw(f: &mut Frame<'_>, figure: &Figure) {
    figure_view::draw_figure(f, figure);
}
