//! Native companion for the invitation site.
//!
//! - [`manifest_json`] / [`write_manifest`] - Build-time gallery listing
//! - [`server`] - HTTP server with a per-request gallery endpoint

pub mod server;

use std::fs;
use std::path::Path;

use anyhow::Context;
use vows_core::Gallery;

/// Assemble the gallery under `public_root` and render it as JSON.
pub fn manifest_json(public_root: &Path) -> anyhow::Result<String> {
    let gallery = Gallery::assemble(public_root);
    serde_json::to_string_pretty(&gallery).context("failed to serialize gallery")
}

/// Write the gallery manifest to `output`, returning the number of entries.
pub fn write_manifest(public_root: &Path, output: &Path) -> anyhow::Result<usize> {
    let gallery = Gallery::assemble(public_root);
    let json = serde_json::to_string_pretty(&gallery).context("failed to serialize gallery")?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;

    Ok(gallery.len())
}
