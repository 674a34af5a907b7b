//! Min / Max input boxes, selection stats and the validation line.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rangebrush_core::{EditState, Endpoint};

use crate::app::{AppState, Focus};
use crate::theme;

use super::AppLayout;

pub fn render(f: &mut Frame, l: &AppLayout, app: &AppState) {
    render_input(f, l.start_input, app, Focus::Start);
    render_input(f, l.end_input, app, Focus::End);
    render_stats(f, l.stats, app);
    render_message(f, l.message, app);
}

/// Style for an endpoint's text: red while unparsable, orange while a valid edit is pending.
fn text_style(app: &AppState, endpoint: Endpoint) -> Style {
    match app.selector.edit_buffer(endpoint) {
        Some(buffer) if !buffer.valid => theme::negative(),
        Some(_) => theme::warning(),
        None if app.selector.is_dragging() => theme::warning(),
        None => theme::text(),
    }
}

fn render_input(f: &mut Frame, area: Rect, app: &AppState, focus: Focus) {
    let Some(endpoint) = focus.endpoint() else {
        return;
    };
    let focused = app.focus == focus;
    let mut spans = vec![Span::styled(
        app.selector.endpoint_text(endpoint),
        text_style(app, endpoint),
    )];
    if focused {
        spans.push(Span::styled("▏", theme::accent()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(format!(" {} ", focus.label()))
        .title_style(theme::panel_title(focused));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let domain = app.selector.domain();
    let mut spans = vec![
        Span::styled(
            format!(" {} / {} values", app.selected_count, app.values.len()),
            theme::accent(),
        ),
        Span::styled(
            format!("  domain [{}, {}]  {} bins", domain.min(), domain.max(), app.bin_count),
            theme::muted(),
        ),
    ];
    if *domain != app.full_domain {
        spans.push(Span::styled("  zoomed", theme::neutral()));
    }
    if app.selector.settle_pending() {
        spans.push(Span::styled("  settling", theme::warning()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Selection ")
        .title_style(theme::panel_title(false));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_message(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.selector.validation_message() {
        Some(msg) => Line::from(Span::styled(format!(" {msg}"), theme::negative())),
        None if app.selector.edit_state() == EditState::Editing => Line::from(Span::styled(
            " Enter to apply, Esc to discard",
            theme::muted(),
        )),
        None => Line::default(),
    };
    f.render_widget(Paragraph::new(line), area);
}
