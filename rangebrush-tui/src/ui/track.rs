//! Histogram bars, the brush track and its axis labels.
//!
//! The track row stands for the full track width in the selector's pixel
//! space, margins included, so terminal columns and track pixels map
//! proportionally and the handles line up with the bars above them.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use rangebrush_core::{Geometry, Selection};

use crate::app::AppState;
use crate::theme;

const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Range pixel under the middle of terminal column `col`, clamped to the range.
pub fn column_to_pixel(col: u16, track: Rect, geometry: &Geometry) -> f64 {
    let rel = col.saturating_sub(track.x).min(track.width.saturating_sub(1)) as f64;
    let px_per_col = geometry.track_width_px() / f64::from(track.width.max(1));
    ((rel + 0.5) * px_per_col - geometry.left_margin_px()).clamp(0.0, geometry.effective_width())
}

/// Terminal column containing range pixel `px`.
pub fn pixel_to_column(px: f64, track: Rect, geometry: &Geometry) -> u16 {
    let px_per_col = geometry.track_width_px() / f64::from(track.width.max(1));
    let rel = ((px + geometry.left_margin_px()) / px_per_col).floor().max(0.0) as u16;
    track.x + rel.min(track.width.saturating_sub(1))
}

/// Glyphs for one bar, bottom row first.
pub fn bar_glyphs(count: usize, max_count: usize, rows: u16) -> Vec<&'static str> {
    let rows = usize::from(rows);
    if max_count == 0 || rows == 0 {
        return vec![EIGHTHS[0]; rows];
    }
    let mut eighths = count * rows * 8 / max_count;
    // Any non-empty bin shows at least a sliver
    if count > 0 && eighths == 0 {
        eighths = 1;
    }
    (0..rows)
        .map(|_| {
            let cell = eighths.min(8);
            eighths -= cell;
            EIGHTHS[cell]
        })
        .collect()
}

/// Selection to draw: the live brush while dragging, otherwise the committed one.
fn shown_selection(app: &AppState) -> Selection {
    app.selector
        .pending_selection()
        .unwrap_or_else(|| app.selector.selection())
}

/// Columns covering the range `[0, effective_width]`.
fn range_columns(track: Rect, geometry: &Geometry) -> (u16, u16) {
    (
        pixel_to_column(0.0, track, geometry),
        pixel_to_column(geometry.effective_width(), track, geometry),
    )
}

pub fn render_histogram(f: &mut Frame, area: Rect, track: Rect, app: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let geometry = app.selector.geometry();
    let scale = app.selector.scale();
    let shown = shown_selection(app);
    let dragging = app.selector.is_dragging();
    let (first, last) = range_columns(track, geometry);
    let buf = f.buffer_mut();

    for col in first..=last {
        let px = column_to_pixel(col, track, geometry);
        let Some(bin) = app.histogram.bin_at(scale.pixel_to_domain(px)) else {
            continue;
        };
        let style = theme::bin(bin.overlaps(&shown), dragging);
        let glyphs = bar_glyphs(bin.count, app.histogram.max_count(), area.height);
        for (i, glyph) in glyphs.into_iter().enumerate() {
            let y = area.bottom() - 1 - i as u16;
            put(buf, col, y, glyph, style);
        }
    }
}

pub fn render_track(f: &mut Frame, area: Rect, app: &AppState) {
    let geometry = app.selector.geometry();
    let (first, last) = range_columns(area, geometry);
    let (a, b) = app.selector.handle_pixels();
    let (ca, cb) = (
        pixel_to_column(a, area, geometry),
        pixel_to_column(b, area, geometry),
    );
    let brush = if app.selector.is_dragging() {
        theme::warning()
    } else {
        theme::accent()
    };
    let buf = f.buffer_mut();

    for col in first..=last {
        if col > ca && col < cb {
            put(buf, col, area.y, "━", brush);
        } else {
            put(buf, col, area.y, "─", theme::muted());
        }
    }
    put(buf, ca, area.y, "┃", brush.add_modifier(ratatui::style::Modifier::BOLD));
    put(buf, cb, area.y, "┃", brush.add_modifier(ratatui::style::Modifier::BOLD));
}

pub fn render_axis(f: &mut Frame, area: Rect, track: Rect, app: &AppState) {
    let geometry = app.selector.geometry();
    let (first, last) = range_columns(track, geometry);
    let domain = app.selector.domain();
    let min_label = format!("{}", domain.min());
    let max_label = format!("{}", domain.max());
    let buf = f.buffer_mut();

    buf.set_string(first, area.y, &min_label, theme::muted());
    let max_x = (last + 1)
        .saturating_sub(max_label.len() as u16)
        .max(first + min_label.len() as u16 + 1);
    if max_x + (max_label.len() as u16) <= area.right() {
        buf.set_string(max_x, area.y, &max_label, theme::muted());
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if buf.area.contains(ratatui::layout::Position::new(x, y)) {
        buf.set_string(x, y, symbol, style);
    }
}
