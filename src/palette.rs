use image::{Rgba, RgbaImage};

use crate::error::PaintError;

/// Decode a palette strip supplied as encoded bytes (PNG, JPEG, ...).
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, PaintError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Procedurally generated palette strip: a full hue sweep left to right,
/// ramping towards white at the top and black at the bottom. Stands in when
/// no palette asset is supplied, so colour sampling always has pixels.
pub fn hue_strip(width: u32, height: u32) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);

    let mut strip = RgbaImage::new(width, height);
    for y in 0..height {
        let t = if height == 1 {
            0.5
        } else {
            y as f32 / (height - 1) as f32
        };
        // Top half desaturates towards white, bottom half darkens to black.
        let (saturation, value) = if t < 0.5 {
            (t * 2.0, 1.0)
        } else {
            (1.0, 1.0 - (t - 0.5) * 2.0)
        };
        for x in 0..width {
            let hue = x as f32 / width as f32 * 360.0;
            let [r, g, b] = hsv_to_rgb(hue, saturation, value);
            strip.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
    strip
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let c = value * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
