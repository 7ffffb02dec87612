use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use logo_gen::verify;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "logo.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path))?;

    println!("Checking logo silhouette in: {}", path);
    let report = verify::inspect(&img.to_rgba8())?;
    println!("{}", report);

    if !report.is_valid() {
        anyhow::bail!("{} does not match the rounded-square silhouette", path);
    }
    println!("✓ Silhouette matches");
    Ok(())
}
