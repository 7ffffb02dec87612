//! Checks a rendered (or decoded) logo against its silhouette.

use crate::logo::{build_mask, LogoGeometry};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilhouetteReport {
    pub size: u32,
    /// Alpha of the top-left, top-right, bottom-left and bottom-right pixels.
    pub corner_alpha: [u8; 4],
    pub center: Rgba<u8>,
    /// Pixels outside the silhouette that are not fully transparent.
    pub opaque_outside: usize,
    /// Pixels inside the silhouette that are fully transparent.
    pub transparent_inside: usize,
}

impl SilhouetteReport {
    pub fn is_valid(&self) -> bool {
        self.opaque_outside == 0 && self.transparent_inside == 0
    }
}

impl fmt::Display for SilhouetteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image dimensions: {}x{}", self.size, self.size)?;
        writeln!(f, "Corner alpha (TL, TR, BL, BR): {:?}", self.corner_alpha)?;
        let [r, g, b, a] = self.center.0;
        writeln!(f, "Center pixel RGBA: [{}, {}, {}, {}]", r, g, b, a)?;
        writeln!(f, "Opaque pixels outside silhouette: {}", self.opaque_outside)?;
        write!(f, "Transparent pixels inside silhouette: {}", self.transparent_inside)
    }
}

/// Compare `img` pixel by pixel with the rounded-square mask for its size.
pub fn inspect(img: &RgbaImage) -> Result<SilhouetteReport> {
    let (width, height) = img.dimensions();
    if width != height || width == 0 {
        anyhow::bail!("Logo must be a non-empty square, got {}x{}", width, height);
    }

    let geometry = LogoGeometry::new(width);
    let mask = build_mask(&geometry);

    let mut opaque_outside = 0;
    let mut transparent_inside = 0;
    for (pixel, expected) in img.pixels().zip(mask.pixels()) {
        match (expected[0], pixel[3]) {
            (0, alpha) if alpha != 0 => opaque_outside += 1,
            (255, 0) => transparent_inside += 1,
            _ => {}
        }
    }

    let last = width - 1;
    Ok(SilhouetteReport {
        size: width,
        corner_alpha: [
            img.get_pixel(0, 0)[3],
            img.get_pixel(last, 0)[3],
            img.get_pixel(0, last)[3],
            img.get_pixel(last, last)[3],
        ],
        center: *img.get_pixel(geometry.center, geometry.center),
        opaque_outside,
        transparent_inside,
    })
}
