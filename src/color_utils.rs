//! Color utility functions shared across the application.
//!
//! Conversion helpers and generated palettes for data layers and
//! highlight rows that have no fixed default color.

use crate::model::HexColor;

/// Convert HSV to RGB.
///
/// # Arguments
/// * `h` - Hue in degrees (0-360)
/// * `s` - Saturation (0.0-1.0)
/// * `v` - Value/brightness (0.0-1.0)
///
/// # Returns
/// RGB tuple with values in range 0.0-1.0
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r + m, g + m, b + m)
}

/// Convert a 0.0-1.0 RGB triple to bytes.
pub fn rgb_to_bytes((r, g, b): (f32, f32, f32)) -> [u8; 3] {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

/// Evenly spaced hue for item `index` out of `count`.
pub fn palette_color(index: usize, count: usize) -> HexColor {
    let count = count.max(1);
    let hue = 360.0 * (index % count) as f32 / count as f32;
    HexColor::from_rgb(rgb_to_bytes(hsv_to_rgb(hue, 0.55, 0.75)))
}
