//! Output manifest
//!
//! A manifest maps output filenames to the pixel size rendered into each of
//! them. It can be read from a JSON object such as
//!
//! ```json
//! { "logo.png": 1024, "logo_foreground.png": 1024 }
//! ```
//!
//! or assembled from `NAME=PX` pairs given on the command line.

use crate::logo::MAX_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path, str::FromStr};

/// Filename of the main logo in the reference batch.
pub const LOGO_FILENAME: &str = "logo.png";
/// Filename of the adaptive-icon foreground layer in the reference batch.
pub const FOREGROUND_FILENAME: &str = "logo_foreground.png";
/// Side length used by the reference batch.
pub const REFERENCE_SIZE: u32 = 1024;

/// One requested output: a filename and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub filename: String,
    pub size: u32,
}

impl FromStr for OutputEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (filename, size) = s
            .split_once('=')
            .with_context(|| format!("Expected NAME=PX, got '{}'", s))?;
        let size = size
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid pixel size in '{}'", s))?;

        let entry = OutputEntry {
            filename: filename.trim().to_string(),
            size,
        };
        entry.validate()?;
        Ok(entry)
    }
}

impl OutputEntry {
    pub fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            anyhow::bail!("Output filename must not be empty");
        }
        if self.filename.contains(['/', '\\']) {
            anyhow::bail!(
                "Output filename '{}' must not contain a path separator",
                self.filename
            );
        }
        if self.size == 0 {
            anyhow::bail!("Size for '{}' must be greater than 0", self.filename);
        }
        if self.size > MAX_SIZE {
            anyhow::bail!(
                "Size {} for '{}' exceeds the maximum of {} pixels",
                self.size,
                self.filename,
                MAX_SIZE
            );
        }
        Ok(())
    }
}

/// Ordered set of outputs for one batch, keyed by filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, u32>,
}

impl Manifest {
    /// The primary logo plus the adaptive-icon foreground, both 1024 px.
    pub fn reference() -> Self {
        let mut manifest = Self::default();
        manifest.insert(LOGO_FILENAME, REFERENCE_SIZE);
        manifest.insert(FOREGROUND_FILENAME, REFERENCE_SIZE);
        manifest
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(json).context("Failed to parse manifest JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid manifest {}", path.display()))
    }

    /// Add or replace an output.
    pub fn insert(&mut self, filename: impl Into<String>, size: u32) {
        self.entries.insert(filename.into(), size);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = OutputEntry>) {
        for entry in entries {
            self.insert(entry.filename, entry.size);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = OutputEntry> + '_ {
        self.entries.iter().map(|(filename, &size)| OutputEntry {
            filename: filename.clone(),
            size,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject empty manifests and invalid entries before anything is rendered.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            anyhow::bail!("Manifest must request at least one output");
        }
        for entry in self.entries() {
            entry.validate()?;
        }
        Ok(())
    }
}
