//! The logo composition
//!
//! A logo is rendered in four fixed stages on one RGBA canvas:
//!
//! 1. a radial gradient disc,
//! 2. a rounded-square alpha mask that clips the canvas,
//! 3. three ascending white bars,
//! 4. a trend line with a dart arrowhead.
//!
//! All sizes are derived from the canvas side through [`Proportions`], and
//! every color comes from a [`Palette`], so [`render_logo`] is a pure function
//! of the requested size.

use crate::raster::{self, Point, Rect};
use anyhow::Result;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::num::NonZeroU32;

/// Largest canvas side accepted by [`render_logo`]; a 16384 px canvas is 1 GiB of RGBA.
pub const MAX_SIZE: u32 = 16384;

/// Colors used by the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Gradient color at the rim of the disc (indigo).
    pub primary: Rgba<u8>,
    /// Gradient color at the center of the disc (purple).
    pub secondary: Rgba<u8>,
    /// Fill for the bars.
    pub bars: Rgba<u8>,
    /// Fill for the trend line and its arrowhead.
    pub trend: Rgba<u8>,
}

impl Palette {
    pub const REFERENCE: Palette = Palette {
        primary: Rgba([99, 102, 241, 255]),
        secondary: Rgba([139, 92, 246, 255]),
        bars: Rgba([255, 255, 255, 255]),
        trend: Rgba([255, 255, 255, 200]),
    };
}

/// Fractions and divisors that place every element relative to the canvas side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    /// Gradient disc radius as a fraction of the side.
    pub disc_radius: f64,
    /// Silhouette corner radius as a fraction of the side.
    pub corner_radius: f64,
    /// Side of the pictogram region as a fraction of the side.
    pub icon_region: f64,
    /// Height of the first bar as a fraction of the icon region.
    pub bar_base_height: f64,
    /// Height added per bar as a fraction of the icon region.
    pub bar_height_step: f64,
    /// The icon region is split into this many bar widths.
    pub bar_width_divisor: NonZeroU32,
    /// The icon region is split into this many bar gaps.
    pub bar_spacing_divisor: NonZeroU32,
    /// Horizontal position of the middle trend point within the icon region.
    pub trend_mid_x: f64,
    /// Horizontal position of the last trend point within the icon region.
    pub trend_end_x: f64,
    /// Stroke width is the side divided by this.
    pub stroke_divisor: NonZeroU32,
    /// Arrowhead size is the side divided by this.
    pub arrow_divisor: NonZeroU32,
}

const fn divisor(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("divisor must be non-zero"),
    }
}

impl Proportions {
    pub const REFERENCE: Proportions = Proportions {
        disc_radius: 0.42,
        corner_radius: 0.25,
        icon_region: 0.5,
        bar_base_height: 0.3,
        bar_height_step: 0.25,
        bar_width_divisor: divisor(5),
        bar_spacing_divisor: divisor(6),
        trend_mid_x: 0.4,
        trend_end_x: 0.8,
        stroke_divisor: divisor(80),
        arrow_divisor: divisor(30),
    };
}

/// One bar of the pictogram, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: u32,
    pub top: u32,
    pub bottom: u32,
    pub width: u32,
}

impl Bar {
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    fn rect(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.top as f64,
            (self.x + self.width) as f64,
            self.bottom as f64,
        )
    }
}

/// Every measurement of the composition for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoGeometry {
    pub size: u32,
    pub center: u32,
    pub disc_radius: u32,
    pub corner_radius: u32,
    pub icon_size: u32,
    pub icon_start: u32,
    pub bar_spacing: u32,
    pub bar_corner_radius: u32,
    pub bars: [Bar; 3],
    pub trend: [Point; 3],
    pub stroke_width: u32,
    pub arrow_size: u32,
}

impl LogoGeometry {
    pub fn new(size: u32) -> Self {
        Self::with_proportions(size, &Proportions::REFERENCE)
    }

    pub fn with_proportions(size: u32, p: &Proportions) -> Self {
        let side = size as f64;
        let center = size / 2;
        let icon_size = (side * p.icon_region).round() as u32;
        let icon_start = (size - icon_size) / 2;
        let bar_width = icon_size / p.bar_width_divisor;
        let bar_spacing = icon_size / p.bar_spacing_divisor;
        let baseline = center + icon_size / 4;

        let bars = [0u32, 1, 2].map(|i| {
            let height = (icon_size as f64
                * (p.bar_base_height + p.bar_height_step * i as f64))
                .floor() as u32;
            Bar {
                x: icon_start + i * (bar_width + bar_spacing),
                top: baseline.saturating_sub(height),
                bottom: baseline,
                width: bar_width,
            }
        });

        let (start, c, icon) = (icon_start as f64, center as f64, icon_size as f64);
        let trend = [
            (start, c + (icon_size / 6) as f64),
            (start + p.trend_mid_x * icon, c - (icon_size / 8) as f64),
            (start + p.trend_end_x * icon, c - (icon_size / 4) as f64),
        ];

        Self {
            size,
            center,
            disc_radius: (side * p.disc_radius).round() as u32,
            corner_radius: (side * p.corner_radius).round() as u32,
            icon_size,
            icon_start,
            bar_spacing,
            bar_corner_radius: bar_width / 4,
            bars,
            trend,
            stroke_width: size / p.stroke_divisor,
            arrow_size: size / p.arrow_divisor,
        }
    }

    /// Dart-shaped arrowhead at the last trend point, tip first.
    pub fn arrowhead(&self) -> [Point; 4] {
        let (x, y) = self.trend[2];
        let s = self.arrow_size as f64;
        let notch = (self.arrow_size / 2) as f64;
        [(x, y), (x - s, y + s), (x - notch, y), (x - s, y - s)]
    }
}

/// Linear blend from `secondary` (t = 0) to `primary` (t = 1), floored per channel.
pub fn gradient_color(palette: &Palette, t: f64) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: usize| {
        let primary = palette.primary[channel] as f64;
        let secondary = palette.secondary[channel] as f64;
        (primary * t + secondary * (1.0 - t)).floor() as u8
    };
    Rgba([mix(0), mix(1), mix(2), 255])
}

/// Stage 1: paint the gradient disc around the canvas center.
pub fn paint_gradient_disc(canvas: &mut RgbaImage, geometry: &LogoGeometry, palette: &Palette) {
    let radius = geometry.disc_radius;
    if radius == 0 {
        return;
    }
    let r = radius as f64;
    raster::fill_radial(
        canvas,
        (geometry.center, geometry.center),
        radius,
        |distance| gradient_color(palette, distance / r),
    );
}

/// Alpha mask of the rounded-square silhouette: 255 inside, 0 outside.
pub fn build_mask(geometry: &LogoGeometry) -> GrayImage {
    let side = geometry.size as f64;
    let mut mask = GrayImage::new(geometry.size, geometry.size);
    raster::fill_rounded_rect(
        &mut mask,
        Rect::new(0.0, 0.0, side, side),
        geometry.corner_radius as f64,
        Luma([255]),
    );
    mask
}

/// Stage 2: replace the canvas alpha with the silhouette mask, keeping RGB.
pub fn apply_rounded_mask(canvas: &mut RgbaImage, geometry: &LogoGeometry) {
    let mask = build_mask(geometry);
    for (pixel, alpha) in canvas.pixels_mut().zip(mask.pixels()) {
        pixel[3] = alpha[0];
    }
}

/// Stage 3: draw the three bars over whatever lies beneath.
pub fn draw_bars(canvas: &mut RgbaImage, geometry: &LogoGeometry, palette: &Palette) {
    for bar in geometry.bars.iter().filter(|bar| bar.width > 0) {
        raster::fill_rounded_rect(
            canvas,
            bar.rect(),
            geometry.bar_corner_radius as f64,
            palette.bars,
        );
    }
}

/// Stage 4: stroke the trend polyline and fill its arrowhead.
pub fn draw_trend_line(canvas: &mut RgbaImage, geometry: &LogoGeometry, palette: &Palette) {
    let width = geometry.stroke_width.max(1) as f64;
    for segment in geometry.trend.windows(2) {
        raster::stroke_segment(canvas, segment[0], segment[1], width, palette.trend);
    }

    if geometry.arrow_size > 0 {
        raster::fill_polygon(canvas, &geometry.arrowhead(), palette.trend);
    }
}

/// Render the reference logo at `size × size` pixels.
pub fn render_logo(size: u32) -> Result<RgbaImage> {
    render_logo_with(size, &Palette::REFERENCE, &Proportions::REFERENCE)
}

#[tracing::instrument(skip(palette, proportions))]
pub fn render_logo_with(
    size: u32,
    palette: &Palette,
    proportions: &Proportions,
) -> Result<RgbaImage> {
    if size == 0 {
        anyhow::bail!("Logo size must be a positive number of pixels");
    }
    let side = size as usize;
    if size > MAX_SIZE || side.checked_mul(side).and_then(|n| n.checked_mul(4)).is_none() {
        anyhow::bail!("Logo size {} exceeds the maximum of {} pixels", size, MAX_SIZE);
    }

    let geometry = LogoGeometry::with_proportions(size, proportions);
    tracing::debug!(?geometry, "derived logo geometry");

    let mut canvas = RgbaImage::new(size, size);
    paint_gradient_disc(&mut canvas, &geometry, palette);
    apply_rounded_mask(&mut canvas, &geometry);
    draw_bars(&mut canvas, &geometry, palette);
    draw_trend_line(&mut canvas, &geometry, palette);

    Ok(canvas)
}
