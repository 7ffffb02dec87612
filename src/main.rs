use anyhow::Result;
use clap::Parser;
use logo_gen::{Manifest, OutputEntry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "logo-gen",
    about = "Render the gradient bar-chart logo as PNG files"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Outputs to render as NAME=PX pairs. Overrides manifest entries with the same name.
    #[clap(short, long, value_delimiter = ',', value_name = "NAME=PX")]
    size: Vec<OutputEntry>,

    /// JSON file mapping output filenames to pixel sizes.
    #[clap(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut manifest = match &args.manifest {
        Some(path) => Manifest::load(path)?,
        None if args.size.is_empty() => Manifest::reference(),
        None => Manifest::default(),
    };
    manifest.extend(args.size);

    logo_gen::generate_logos(&args.output, &manifest)?;
    Ok(())
}
