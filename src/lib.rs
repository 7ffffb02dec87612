pub mod export;
pub mod logo;
pub mod manifest;
pub mod raster;
pub mod verify;

pub use export::generate_logos;
pub use logo::render_logo;
pub use manifest::{Manifest, OutputEntry};
