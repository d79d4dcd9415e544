// Debug label drawing. Labels are collected while compositing and stamped onto
// the finished canvas with a small built-in bitmap font: white glyphs with a
// one-pixel black outline.
use itertools::Itertools;

use crate::{common::Color, pixels::PixelBuffer};

const GLYPH_WIDTH: i64 = 5;
const GLYPH_HEIGHT: i64 = 7;
const ADVANCE: i64 = GLYPH_WIDTH + 1;
const LINE_HEIGHT: i64 = GLYPH_HEIGHT + 2;

/// Multi-line text centered on `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub x: i64,
    pub y: i64,
    pub text: String,
}

// Each row is five bits wide, most significant bit on the left.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'k' => [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        '@' => [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E],
        '$' => [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(rows)
}

fn text_width(line: &str, scale: i64) -> i64 {
    let n = line.chars().count() as i64;
    if n == 0 {
        0
    } else {
        (n * ADVANCE - 1) * scale
    }
}

fn draw_line(canvas: &mut PixelBuffer, line: &str, x: i64, y: i64, scale: i64, color: Color) {
    for (i, c) in line.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let gx = x + i as i64 * ADVANCE * scale;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                    continue;
                }
                for (sx, sy) in itertools::iproduct!(0..scale, 0..scale) {
                    canvas.set_pixel(
                        gx + col * scale + sx,
                        y + row as i64 * scale + sy,
                        color,
                    );
                }
            }
        }
    }
}

pub fn draw_label(canvas: &mut PixelBuffer, label: &Label, scale: u32) {
    let scale = scale.max(1) as i64;
    let lines = label.text.lines().collect_vec();
    let mut y = label.y - (lines.len() as i64 * LINE_HEIGHT * scale) / 2;
    for line in lines {
        let x = label.x - text_width(line, scale) / 2;
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            draw_line(canvas, line, x + dx, y + dy, scale, Color::BLACK);
        }
        draw_line(canvas, line, x, y, scale, Color::WHITE);
        y += LINE_HEIGHT * scale;
    }
}

pub fn draw_labels(canvas: &mut PixelBuffer, labels: &[Label], scale: u32) {
    for label in labels {
        draw_label(canvas, label, scale);
    }
}
