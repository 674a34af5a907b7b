//! Top-level UI layout: histogram over the brush track, endpoint inputs, commit history and status bar.

pub mod inputs;
pub mod status_bar;
pub mod track;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub chart: Rect,
    pub histogram: Rect,
    pub track: Rect,
    pub axis: Rect,
    pub start_input: Rect,
    pub end_input: Rect,
    pub stats: Rect,
    pub message: Rect,
    pub history: Rect,
    pub status: Rect,
}

/// Split the terminal area. Pure, so input handling can recompute it.
pub fn layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    let chart = rows[0];
    let chart_inner = Block::default().borders(Borders::ALL).inner(chart);
    let chart_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(chart_inner);

    let input_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(24),
            Constraint::Min(10),
        ])
        .split(rows[1]);

    AppLayout {
        chart,
        histogram: chart_rows[0],
        track: chart_rows[1],
        axis: chart_rows[2],
        start_input: input_cols[0],
        end_input: input_cols[1],
        stats: input_cols[2],
        message: rows[2],
        history: rows[3],
        status: rows[4],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.viewport = f.area();
    let l = layout(app.viewport);

    let focused = app.focus == Focus::Track;
    let title = if app.selector.is_dragging() {
        " Histogram [brushing] "
    } else {
        " Histogram "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused));
    f.render_widget(block, l.chart);

    track::render_histogram(f, l.histogram, l.track, app);
    track::render_track(f, l.track, app);
    track::render_axis(f, l.axis, l.track, app);

    inputs::render(f, &l, app);
    render_history(f, l.history, app);
    status_bar::render(f, l.status, app);

    if app.show_help {
        render_help(f, centered_rect(60, 70, l.chart.union(l.history)));
    }
}

fn render_history(f: &mut Frame, area: Rect, app: &AppState) {
    let items: Vec<ListItem> = app
        .commit_history
        .iter()
        .map(|rec| {
            ListItem::new(Line::from(vec![
                Span::styled(rec.timestamp.format("%H:%M:%S").to_string(), theme::muted()),
                Span::raw("  "),
                Span::styled(rec.selection.to_string(), theme::positive()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border(false))
            .title(format!(" Commits ({}) ", app.commit_history.len()))
            .title_style(theme::panel_title(false)),
    );
    f.render_widget(list, area);
}

const HELP: &[(&str, &str)] = &[
    ("mouse drag", "brush a range on the histogram"),
    ("Tab / S-Tab", "cycle focus: track, Min, Max"),
    ("h / l", "nudge the brush left / right"),
    ("Esc", "cancel the brush or the typed edit"),
    ("Enter", "commit the typed Min / Max"),
    ("r", "select the whole domain"),
    ("z / u", "zoom into the selection / zoom out"),
    ("+ / -", "more / fewer histogram bins"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

fn render_help(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>12}  "), theme::accent_bold()),
                Span::styled(*what, theme::text()),
            ])
        })
        .collect();
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::accent())
                .title(" Keys ")
                .title_style(theme::accent_bold()),
        ),
        area,
    );
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
