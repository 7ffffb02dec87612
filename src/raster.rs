//! Coverage primitives for the logo renderer
//!
//! Every shape here writes its color straight into the target buffer; nothing
//! is blended with what was underneath. The primitives are generic over
//! [`image::Pixel`] so the same code fills RGBA canvases and single-channel
//! alpha masks.
//!
//! Coverage is decided at pixel centers `(x + 0.5, y + 0.5)`, except for
//! [`fill_radial`], which measures from integer pixel coordinates so that the
//! pixel sitting on the center gets distance zero.

use image::{ImageBuffer, Pixel};
use std::ops::Range;

/// A point in canvas space, `(x, y)`, with y growing downwards.
pub type Point = (f64, f64);

/// Buffer type every primitive draws into.
pub type Buffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Axis-aligned rectangle spanning `[x0, x1] × [y0, y1]` in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

fn pixel_center(x: u32, y: u32) -> Point {
    (x as f64 + 0.5, y as f64 + 0.5)
}

/// Pixel indices whose centers can fall inside `[lo, hi]`, clipped to `0..limit`.
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let start = (lo - 0.5).floor().max(0.0) as u32;
    let end = ((hi + 0.5).ceil().max(0.0) as u32).min(limit);
    start.min(end)..end
}

/// Fill every pixel within `radius` of `center` with the color returned by
/// `shade`, which receives the pixel's distance from the center.
///
/// Distances are measured between integer pixel coordinates. A radius of zero
/// draws nothing.
pub fn fill_radial<P, F>(img: &mut Buffer<P>, center: (u32, u32), radius: u32, shade: F)
where
    P: Pixel,
    F: Fn(f64) -> P,
{
    if radius == 0 {
        return;
    }

    let (cx, cy) = (center.0 as i64, center.1 as i64);
    let r = radius as i64;
    let (width, height) = (img.width() as i64, img.height() as i64);
    let r_sq = (r * r) as f64;

    for y in (cy - r).max(0)..(cy + r + 1).min(height) {
        for x in (cx - r).max(0)..(cx + r + 1).min(width) {
            let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= r_sq {
                img.put_pixel(x as u32, y as u32, shade(dist_sq.sqrt()));
            }
        }
    }
}

/// True when `point` lies inside `rect` with its corners rounded off by `radius`.
///
/// The radius is clamped to half of the shorter side.
pub fn rounded_rect_contains(rect: &Rect, radius: f64, point: Point) -> bool {
    let (px, py) = point;
    if rect.is_empty() || px < rect.x0 || px > rect.x1 || py < rect.y0 || py > rect.y1 {
        return false;
    }

    let r = radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    if r == 0.0 {
        return true;
    }

    // Nearest point on the inner rectangle whose offset by `r` is the shape.
    let nx = px.clamp(rect.x0 + r, rect.x1 - r);
    let ny = py.clamp(rect.y0 + r, rect.y1 - r);
    let (dx, dy) = (px - nx, py - ny);
    dx * dx + dy * dy <= r * r
}

/// Fill a rounded rectangle.
pub fn fill_rounded_rect<P: Pixel>(img: &mut Buffer<P>, rect: Rect, radius: f64, color: P) {
    if rect.is_empty() {
        return;
    }

    for y in pixel_span(rect.y0, rect.y1, img.height()) {
        for x in pixel_span(rect.x0, rect.x1, img.width()) {
            if rounded_rect_contains(&rect, radius, pixel_center(x, y)) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Stroke the segment `from → to` with butt ends.
///
/// A pixel is covered when its center projects onto the segment and lies at
/// most `width / 2` away from it. Zero-length segments draw nothing.
pub fn stroke_segment<P: Pixel>(img: &mut Buffer<P>, from: Point, to: Point, width: f64, color: P) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 || width <= 0.0 {
        return;
    }
    let len = len_sq.sqrt();
    let half = width / 2.0;

    let xs = pixel_span(from.0.min(to.0) - half, from.0.max(to.0) + half, img.width());
    let ys = pixel_span(from.1.min(to.1) - half, from.1.max(to.1) + half, img.height());

    for y in ys {
        for x in xs.clone() {
            let (px, py) = pixel_center(x, y);
            let (rx, ry) = (px - from.0, py - from.1);
            let along = (rx * dx + ry * dy) / len_sq;
            if !(0.0..=1.0).contains(&along) {
                continue;
            }
            let across = (rx * dy - ry * dx).abs() / len;
            if across <= half {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(points: &[Point], point: Point) -> bool {
    let (px, py) = point;
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);

    for (i, &(xi, yi)) in points.iter().enumerate() {
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) {
            let cross_x = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Fill a simple polygon (convex or not). Fewer than three points draws nothing.
pub fn fill_polygon<P: Pixel>(img: &mut Buffer<P>, points: &[Point], color: P) {
    if points.len() < 3 {
        return;
    }

    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for &(x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    for y in pixel_span(min_y, max_y, img.height()) {
        for x in pixel_span(min_x, max_x, img.width()) {
            if polygon_contains(points, pixel_center(x, y)) {
                img.put_pixel(x, y, color);
            }
        }
    }
}
