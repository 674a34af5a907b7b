//! Bottom status bar with key hints for the focused control and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, StatusLevel};
use crate::theme;

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Track => " drag:brush h/l:nudge z/u:zoom r:reset +/-:bins ?:help q:quit",
        Focus::Start | Focus::End => " Enter:apply Esc:discard Tab:next ?:help",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" [{}]", app.focus.label()),
        theme::accent_bold(),
    ));
    spans.push(Span::styled(hints(app.focus), theme::muted()));

    // Separator
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
