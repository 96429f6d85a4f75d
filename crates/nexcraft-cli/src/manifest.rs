//! `pack.yml` manifest written at the output root

use anyhow::{Context, Result};
use nexcraft_core::ConverterConfig;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const MANIFEST_FILE: &str = "pack.yml";

/// Contents of `pack.yml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackManifest {
    pub author: String,
    pub version: String,
    pub description: String,
    pub namespace: String,
}

impl PackManifest {
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            author: config.pack.author.clone(),
            version: config.pack.version.clone(),
            description: config.pack.description.clone(),
            namespace: config.namespace.clone(),
        }
    }
}

pub fn manifest_path(output: &Path) -> PathBuf {
    output.join(MANIFEST_FILE)
}

/// Serialize the manifest to `<output>/pack.yml`
pub fn write_manifest(config: &ConverterConfig) -> Result<PathBuf> {
    let manifest = PackManifest::from_config(config);
    let path = manifest_path(&config.output);

    fs::create_dir_all(&config.output)
        .with_context(|| format!("Failed to create {}", config.output.display()))?;
    let yaml = serde_yaml::to_string(&manifest).context("Failed to serialize pack manifest")?;
    fs::write(&path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote pack manifest {}", path.display());
    Ok(path)
}
