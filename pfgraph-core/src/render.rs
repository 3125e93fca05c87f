//! Renderer boundary — the seam in front of the external drawing engine.
//!
//! The engine that turns a bundle into an SVG lives outside this crate.
//! `BundleWriter` is the shipped implementation: it serializes the
//! bundle to pretty JSON beside the target graphic path for the engine
//! to pick up.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::bundle::ChartBundle;

/// Consumes an assembled bundle and produces the output artifact.
pub trait ChartRenderer {
    /// Render the bundle, returning the path actually written.
    fn render(&self, bundle: &ChartBundle) -> Result<PathBuf>;
}

/// Writes the bundle as pretty JSON next to the graphic path.
///
/// `NaN` values serialize as `null`, which doubles as the missing-value
/// marker on the wire.
#[derive(Debug, Default)]
pub struct BundleWriter;

impl ChartRenderer for BundleWriter {
    fn render(&self, bundle: &ChartBundle) -> Result<PathBuf> {
        let target = bundle.graphic_file.with_extension("json");
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(bundle)
            .context("failed to serialize chart bundle to JSON")?;
        std::fs::write(&target, json)
            .with_context(|| format!("failed to write {}", target.display()))?;
        log::info!("wrote chart bundle to {}", target.display());
        Ok(target)
    }
}
