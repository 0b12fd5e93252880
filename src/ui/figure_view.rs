//! Figure view - pure rendering layer.

use crate::chart::Figure;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Draw the figure centered in the frame.
pub(crate) fn draw_figure(f: &mut Frame<'_>, figure: &Figure) {
    let config = figure.config();
    let (width, height) = config.figure_size.cells();
    let area = centered_fixed_rect(width, height, f.area());

    // Grid first so the series are painted over it
    let mut datasets: Vec<Dataset<'_>> = figure
        .grid_lines()
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(config.grid_color))
                .data(segment.as_slice())
        })
        .collect();

    datasets.push(
        Dataset::default()
            .name(config.spline_label.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(config.spline_color))
            .data(figure.spline_trace()),
    );
    // Per-sample markers, unnamed so the legend lists the trace once
    datasets.push(
        Dataset::default()
            .marker(config.marker_style)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(config.spline_color))
            .data(figure.spline_trace()),
    );
    datasets.push(
        Dataset::default()
            .name(config.control_label.as_str())
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(config.control_color))
            .data(figure.control_scatter()),
    );

    let x_axis = Axis::default()
        .title(config.x_label.as_str())
        .bounds(figure.x_axis().bounds())
        .labels(figure.x_axis().labels());

    let y_axis = Axis::default()
        .title(config.y_label.as_str())
        .bounds(figure.y_axis().bounds())
        .labels(figure.y_axis().labels());

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(config.title.as_str())
                .title_alignment(Alignment::Center)
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));

    f.render_widget(chart, area);
}

/// Rect of at most `width` x `height` cells centered in `r`.
pub fn centered_fixed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
