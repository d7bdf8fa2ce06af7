//! Screen-space text drawn on top of the 3D scene.

use macroquad::{color::WHITE, text::draw_text};

const FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: f32 = 22.0;
const MARGIN: f32 = 10.0;

/// Draws one line of text per entry, top-left aligned.
///
/// Must run after the default camera has been restored.
pub(crate) fn draw_overlay(lines: &[String]) {
    for (index, line) in lines.iter().enumerate() {
        draw_text(line, MARGIN, line_baseline(index), FONT_SIZE, WHITE);
    }
}

fn line_baseline(index: usize) -> f32 {
    MARGIN + FONT_SIZE + index as f32 * LINE_HEIGHT
}
