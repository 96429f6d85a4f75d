//! Convert command implementation
//!
//! Runs a full pack migration: folder bootstrap, asset copy, `pack.yml`
//! and the item conversion engine.

use crate::commands::init::ensure_folders;
use crate::{assets, manifest, output};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use nexcraft_core::diagnostics::{DiagnosticCollector, DiagnosticSink, Level};
use nexcraft_core::{ConversionReport, Converter, ConverterConfig, OutputLayout};
use std::fs;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Flags of `nexcraft convert` that are not part of the config file
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub clean: bool,
    pub skip_assets: bool,
    pub progress: bool,
}

/// Forwards diagnostics to a collector and mirrors info messages on a spinner
struct ProgressSink<'a> {
    inner: &'a mut DiagnosticCollector,
    spinner: Option<&'a ProgressBar>,
}

impl DiagnosticSink for ProgressSink<'_> {
    fn record(&mut self, level: Level, message: String) {
        if let Some(spinner) = self.spinner
            && level == Level::Info
        {
            spinner.set_message(message.clone());
        }
        self.inner.record(level, message);
    }
}

pub fn convert_command(config: &ConverterConfig, options: &ConvertOptions) -> Result<ConversionReport> {
    let start_time = Instant::now();
    output::print_header("Nexo → CraftEngine Converter");

    info!("Converting Nexo pack");
    info!("  Input: {}", config.input.display());
    info!("  Output: {}", config.output.display());
    info!("  Namespace: {}", config.namespace);

    ensure_folders(config)?;

    let items_dir = config.items_dir();
    if !items_dir.is_dir() {
        error!("Items folder does not exist: {}", items_dir.display());
        bail!("Items folder not found: {}", items_dir.display());
    }

    if options.clean {
        clean_configuration(&OutputLayout::new(&config.output))?;
    }

    let assets_copied = if options.skip_assets {
        0
    } else {
        assets::copy_assets(&config.input, &config.output)?
    };

    if let Err(e) = manifest::write_manifest(config) {
        error!("Failed to write pack manifest: {:#}", e);
    }

    let spinner = options.progress.then(progress_spinner);
    let mut diagnostics = DiagnosticCollector::new();
    let mut sink = ProgressSink {
        inner: &mut diagnostics,
        spinner: spinner.as_ref(),
    };

    let result = Converter::new()
        .with_blacklist(config.folder_blacklist.clone())
        .convert_with_sink(&items_dir, &config.output, &config.namespace, &mut sink);

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let (summary, identifier_report) = result
        .with_context(|| format!("Failed to convert items in {}", items_dir.display()))?;
    let report = ConversionReport {
        summary,
        diagnostics,
        identifier_report,
    };

    output::print_report(&report, assets_copied);
    println!("   Finished in {:.2?}", start_time.elapsed());

    Ok(report)
}

fn progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Converting items...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Remove previously generated configuration so stale item documents vanish
fn clean_configuration(layout: &OutputLayout) -> Result<()> {
    let dir = layout.configuration_dir();
    if dir.exists() {
        fs::remove_dir_all(&dir).with_context(|| format!("Failed to clean {}", dir.display()))?;
        info!("Removed {}", dir.display());
    }
    Ok(())
}
