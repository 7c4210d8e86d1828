use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

use crate::error::PaintError;
use crate::geometry::BrushPath;

/// The 2D drawing primitives the engine consumes. Everything the menu and
/// the brush draw goes through this seam, so tests can drive the whole
/// engine against an in-memory surface.
pub trait DrawTarget {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Fill every pixel with `colour`.
    fn clear(&mut self, colour: Color32);

    fn fill_rect(&mut self, rect: Rect, colour: Color32);

    /// Filled rectangle with a black border of `border_width` straddling the
    /// edge (no border when the width is 0).
    fn draw_box(&mut self, rect: Rect, border_width: f32, fill: Color32);

    /// Filled rounded rectangle with a black border, used by the reset button.
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, border_width: f32, fill: Color32);

    /// Fill a brush path. Polygons use nonzero winding.
    fn fill_path(&mut self, path: &BrushPath, colour: Color32);

    /// Blit an image into `dest`, nearest-neighbour scaled.
    fn draw_image(&mut self, image: &RgbaImage, dest: Rect);

    /// Read back a single pixel. Out-of-bounds reads yield transparent black,
    /// the same as reading an unset pixel.
    fn pixel_at(&self, pos: Pos2) -> Color32;
}

/// A raster surface at the canvas's logical resolution, backed by an RGBA
/// pixel buffer. This is both the paint store (strokes persist until an
/// explicit clear) and the source for palette colour sampling.
pub struct PixelSurface {
    pixels: RgbaImage,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::ZeroSizedSurface { width, height });
        }

        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    /// Reallocate at a new logical resolution. All pixels reset to
    /// transparent; the caller is expected to repaint.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PaintError> {
        if width == 0 || height == 0 {
            return Err(PaintError::ZeroSizedSurface { width, height });
        }

        self.pixels = RgbaImage::new(width, height);
        Ok(())
    }

    /// Copy out as an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.pixels.width() as usize, self.pixels.height() as usize],
            self.pixels.as_raw(),
        )
    }

    /// Clamped integer pixel span covered by a rect: (x0..x1, y0..y1).
    fn span(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let w = self.pixels.width() as f32;
        let h = self.pixels.height() as f32;
        let x0 = rect.min.x.floor().clamp(0.0, w) as u32;
        let y0 = rect.min.y.floor().clamp(0.0, h) as u32;
        let x1 = rect.max.x.ceil().clamp(0.0, w) as u32;
        let y1 = rect.max.y.ceil().clamp(0.0, h) as u32;
        (x0, x1, y0, y1)
    }

    /// Set every pixel whose center satisfies `inside`, scanning `rect`.
    fn fill_where(&mut self, rect: Rect, colour: Color32, inside: impl Fn(Pos2) -> bool) {
        let (x0, x1, y0, y1) = self.span(rect);
        let px = to_rgba(colour);
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside(center) {
                    self.pixels.put_pixel(x, y, px);
                }
            }
        }
    }
}

impl DrawTarget for PixelSurface {
    fn width(&self) -> f32 {
        self.pixels.width() as f32
    }

    fn height(&self) -> f32 {
        self.pixels.height() as f32
    }

    fn clear(&mut self, colour: Color32) {
        let px = to_rgba(colour);
        for pixel in self.pixels.pixels_mut() {
            *pixel = px;
        }
    }

    fn fill_rect(&mut self, rect: Rect, colour: Color32) {
        self.fill_where(rect, colour, |p| rect.contains(p));
    }

    fn draw_box(&mut self, rect: Rect, border_width: f32, fill: Color32) {
        self.fill_rect(rect, fill);

        if border_width <= 0.0 {
            return;
        }

        // Border straddles the rect edge, half in and half out.
        let half = border_width / 2.0;
        let outer = rect.expand(half);
        let inner = rect.shrink(half);
        self.fill_where(outer, Color32::BLACK, |p| {
            outer.contains(p) && !inner.contains(p)
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, border_width: f32, fill: Color32) {
        let half = border_width / 2.0;
        let outer = rect.expand(half);
        let inner = rect.shrink(half);
        let r_outer = radius + half;
        let r_inner = (radius - half).max(0.0);

        self.fill_where(outer, fill, |p| in_round_rect(p, inner, r_inner));
        if border_width > 0.0 {
            self.fill_where(outer, Color32::BLACK, |p| {
                in_round_rect(p, outer, r_outer) && !in_round_rect(p, inner, r_inner)
            });
        }
    }

    fn fill_path(&mut self, path: &BrushPath, colour: Color32) {
        match path {
            BrushPath::Circle { center, radius } => {
                let bbox = Rect::from_center_size(*center, egui::Vec2::splat(radius * 2.0));
                let (c, r2) = (*center, radius * radius);
                self.fill_where(bbox, colour, |p| {
                    let d = p - c;
                    d.x * d.x + d.y * d.y <= r2
                });
            }
            BrushPath::Polygon(vertices) => {
                if vertices.len() < 3 {
                    return;
                }
                let bbox = Rect::from_points(vertices);
                self.fill_where(bbox, colour, |p| winding_number(p, vertices) != 0);
            }
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        if dest.width() <= 0.0 || dest.height() <= 0.0 {
            return;
        }

        let (x0, x1, y0, y1) = self.span(dest);
        let (src_w, src_h) = (image.width(), image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - dest.min.x) / dest.width();
                let v = (y as f32 + 0.5 - dest.min.y) / dest.height();
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                let sx = ((u * src_w as f32) as u32).min(src_w - 1);
                let sy = ((v * src_h as f32) as u32).min(src_h - 1);
                self.pixels.put_pixel(x, y, *image.get_pixel(sx, sy));
            }
        }
    }

    fn pixel_at(&self, pos: Pos2) -> Color32 {
        let x = pos.x.floor();
        let y = pos.y.floor();
        if x < 0.0 || y < 0.0 || x >= self.width() || y >= self.height() {
            return Color32::TRANSPARENT;
        }

        let px = self.pixels.get_pixel(x as u32, y as u32);
        Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3])
    }
}

fn to_rgba(colour: Color32) -> Rgba<u8> {
    Rgba([colour.r(), colour.g(), colour.b(), colour.a()])
}

/// Whether `p` lies inside `rect` with corners rounded to `radius`.
fn in_round_rect(p: Pos2, rect: Rect, radius: f32) -> bool {
    if !rect.contains(p) {
        return false;
    }

    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    // Distance from the nearest point of the radius-inset core rectangle.
    let cx = p.x.clamp(rect.min.x + r, rect.max.x - r);
    let cy = p.y.clamp(rect.min.y + r, rect.max.y - r);
    let (dx, dy) = (p.x - cx, p.y - cy);
    dx * dx + dy * dy <= r * r
}

/// Nonzero winding number of `p` with respect to a closed polygon.
fn winding_number(p: Pos2, vertices: &[Pos2]) -> i32 {
    let mut wn = 0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// > 0 when `p` is left of the directed edge a→b, < 0 when right.
fn is_left(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}
