//! Resource pack asset copy

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Source of the Nexo resource pack assets, relative to the input root
pub fn source_dir(input: &Path) -> PathBuf {
    input.join("pack").join("assets")
}

/// Destination of the assets, relative to the output root
pub fn destination_dir(output: &Path) -> PathBuf {
    output.join("resourcepack").join("assets")
}

/// Recursively copy `<input>/pack/assets` into `<output>/resourcepack/assets`
///
/// Returns the number of files copied. A missing source folder only produces
/// a warning; existing files at the destination are overwritten.
pub fn copy_assets(input: &Path, output: &Path) -> Result<usize> {
    let source = source_dir(input);
    let destination = destination_dir(output);

    if !source.is_dir() {
        warn!("Assets folder not found: {}", source.display());
        return Ok(0);
    }

    info!(
        "Copying assets from {} to {}",
        source.display(),
        destination.display()
    );

    let mut copied = 0;
    for entry in WalkDir::new(&source).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(&source)
            .with_context(|| format!("Unexpected path {}", entry.path().display()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            debug!("Copied {}", relative.display());
            copied += 1;
        }
    }

    info!("Copied {} asset file(s)", copied);
    Ok(copied)
}
