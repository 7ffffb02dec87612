use crate::{logo::render_logo, manifest::Manifest};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Render every output in `manifest` and write it under `out_dir`.
///
/// Outputs are written in ascending size order and only the current canvas is
/// kept, so outputs that share a size are rendered once. The first failure
/// aborts the batch. Returns the paths written, in the order they were written.
pub fn generate_logos(out_dir: &Path, manifest: &Manifest) -> Result<Vec<PathBuf>> {
    manifest.validate()?;
    create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating logos...");
    let mut entries: Vec<_> = manifest.entries().collect();
    entries.sort_by_key(|entry| entry.size);

    let mut current: Option<(u32, RgbaImage)> = None;
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        // drop the previous canvas before the next one is allocated
        if matches!(&current, Some((size, _)) if *size != entry.size) {
            current = None;
        }
        let canvas = match current.take() {
            Some((_, canvas)) => canvas,
            None => render_logo(entry.size)?,
        };

        let output_path = out_dir.join(&entry.filename);
        save_png(&canvas, &output_path)?;
        current = Some((entry.size, canvas));
        println!(
            "  ✓ Generated {} ({}x{})",
            entry.filename, entry.size, entry.size
        );
        written.push(output_path);
    }

    println!("✓ Logos generated successfully");
    Ok(written)
}

pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas.as_raw(), &mut out_file, canvas.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square RGBA data as PNG with best compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
