//! Init command implementation
//!
//! Creates the working folders a conversion expects and a default
//! `nexcraft.yaml` next to them.

use crate::output::print_header;
use anyhow::{Context, Result};
use colored::Colorize;
use nexcraft_core::ConverterConfig;
use nexcraft_core::config::CONFIG_FILE_NAMES;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Create the logs, input and output folders when missing
pub fn ensure_folders(config: &ConverterConfig) -> Result<()> {
    for dir in [&config.logs, &config.input, &config.output] {
        if dir.is_dir() {
            info!("Folder already exists: {}", dir.display());
        } else {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create folder {}", dir.display()))?;
            info!("Created folder: {}", dir.display());
        }
    }
    Ok(())
}

pub fn init_command(config: &ConverterConfig, no_config: bool) -> Result<()> {
    print_header("Nexcraft Project Initialization");

    println!("📁 {}", "Creating working folders...".bold());
    ensure_folders(config)?;
    fs::create_dir_all(config.items_dir())
        .with_context(|| format!("Failed to create {}", config.items_dir().display()))?;
    println!("   ✓ {}", config.input.display());
    println!("   ✓ {}", config.output.display());
    println!("   ✓ {}", config.logs.display());

    if !no_config {
        match write_default_config(Path::new("."), config)? {
            Some(path) => println!("📝 Generated {}", path.display()),
            None => println!("📝 Existing configuration kept"),
        }
    }

    println!(
        "\n{} Put your Nexo items in {} and run {}",
        "✅".green(),
        config.items_dir().display().to_string().bright_cyan(),
        "nexcraft convert".bright_cyan()
    );
    Ok(())
}

/// Write `nexcraft.yaml` into `dir` unless a config file is already there
fn write_default_config(dir: &Path, config: &ConverterConfig) -> Result<Option<PathBuf>> {
    if let Some(existing) = CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    {
        info!("Config already exists: {}", existing.display());
        return Ok(None);
    }

    let path = dir.join(CONFIG_FILE_NAMES[0]);
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    fs::write(&path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created config: {}", path.display());
    Ok(Some(path))
}
