//! Input dispatch: global keys → focus-specific handlers; mouse → track or inputs.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use rangebrush_core::Endpoint;

use crate::app::{AppState, Focus};
use crate::ui::{self, track};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Help overlay consumes input first.
    if app.show_help {
        app.show_help = false;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.set_focus(app.focus.prev());
            } else {
                app.set_focus(app.focus.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return;
        }
        _ => {}
    }

    // 3. Focus-specific keys.
    match app.focus.endpoint() {
        None => handle_track_key(app, key),
        Some(endpoint) => handle_input_key(app, endpoint, key),
    }
}

fn handle_track_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1),
        KeyCode::Char('r') => app.reset_selection(),
        KeyCode::Char('z') => app.zoom_to_selection(),
        KeyCode::Char('u') => app.zoom_out(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.set_bin_count(app.bin_count + 4),
        KeyCode::Char('-') => app.set_bin_count(app.bin_count.saturating_sub(4)),
        KeyCode::Esc => {
            if app.selector.is_dragging() {
                app.cancel_drag();
            }
        }
        _ => {}
    }
}

fn handle_input_key(app: &mut AppState, endpoint: Endpoint, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.backspace(endpoint),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(c) if !c.is_control() => app.type_char(endpoint, c),
        _ => {}
    }
}

/// Handle a mouse event against the layout of the last draw.
pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    let l = ui::layout(app.viewport);
    let pos = Position::new(event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if l.start_input.contains(pos) {
                app.set_focus(Focus::Start);
            } else if l.end_input.contains(pos) {
                app.set_focus(Focus::End);
            } else if l.histogram.contains(pos) || l.track.contains(pos) {
                app.set_focus(Focus::Track);
                let px = track::column_to_pixel(event.column, l.track, app.selector.geometry());
                app.begin_drag(px);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag_anchor.is_some() {
                let px = track::column_to_pixel(event.column, l.track, app.selector.geometry());
                app.continue_drag(px);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.finish_drag(),
        _ => {}
    }
}
