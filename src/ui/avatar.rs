//! Avatar rasterization.
//!
//! Terminal cells are roughly twice as tall as they are wide, so each
//! cell carries two vertically stacked pixels drawn with half-block
//! glyphs: the foreground colors the top half, the background the
//! bottom. Icons are sampled nearest-neighbor down to the requested
//! cell grid.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::icon::Icon;

const UPPER_HALF: &str = "\u{2580}";
const LOWER_HALF: &str = "\u{2584}";

/// Pixels with alpha below this render as an empty half-cell.
const ALPHA_CUTOFF: u8 = 128;

/// Render `icon` as `rows` lines of `cols` half-block cells.
pub fn icon_lines(icon: &Icon, cols: u16, rows: u16) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 || icon.width() == 0 || icon.height() == 0 {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            let top = sample(icon, col, cols, row * 2, rows * 2);
            let bottom = sample(icon, col, cols, row * 2 + 1, rows * 2);
            spans.push(cell(top, bottom));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Nearest-neighbor sample at grid position (`col`, `row`) of a
/// `cols` x `rows` pixel grid. Transparent pixels come back as None.
fn sample(icon: &Icon, col: u16, cols: u16, row: u16, rows: u16) -> Option<Color> {
    let x = (u32::from(col) * icon.width() / u32::from(cols)).min(icon.width() - 1);
    let y = (u32::from(row) * icon.height() / u32::from(rows)).min(icon.height() - 1);
    let [r, g, b, a] = icon.pixel(x, y);
    if a < ALPHA_CUTOFF {
        None
    } else {
        Some(Color::Rgb(r, g, b))
    }
}

fn cell(top: Option<Color>, bottom: Option<Color>) -> Span<'static> {
    match (top, bottom) {
        (Some(top), Some(bottom)) => {
            Span::styled(UPPER_HALF, Style::default().fg(top).bg(bottom))
        }
        (Some(top), None) => Span::styled(UPPER_HALF, Style::default().fg(top)),
        (None, Some(bottom)) => Span::styled(LOWER_HALF, Style::default().fg(bottom)),
        (None, None) => Span::raw(" "),
    }
}
