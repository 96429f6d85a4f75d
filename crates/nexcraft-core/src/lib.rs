//! Nexcraft Core
//!
//! Conversion engine that migrates a Nexo item pack into CraftEngine
//! configuration: item documents with model wiring, a generated locale
//! table, a category taxonomy and a custom model data usage report.

pub mod categories;
pub mod config;
pub mod dedup;
pub mod diagnostics;
pub mod discovery;
pub mod document;
pub mod engine;
pub mod error;
pub mod identifiers;
pub mod locale;
pub mod model;
pub mod templates;
pub mod transform;

// Re-export commonly used types
pub use categories::{CategoryBuilder, select_icon};
pub use config::{ConfigLoader, ConverterConfig, PackMetadata};
pub use dedup::{DedupOutcome, DeduplicationGate};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, Level};
pub use discovery::{DiscoveredFiles, FileDiscovery, YamlFileDiscovery};
pub use document::{DocumentStore, YamlStore, load_items};
pub use engine::{ConversionReport, ConversionSummary, Converter, OutputLayout};
pub use error::{NexcraftError, Result};
pub use identifiers::{Collision, IdRange, IdentifierTracker, compact_ranges, format_ranges};
pub use locale::LocaleTable;
pub use model::{
    Category, CategoryDocument, ConvertedItem, ItemDefinition, ItemDocument, LocaleDocument,
    ModelDescriptor, NamespacedKey, PackSection,
};
pub use transform::{RenderMode, TransformOutcome, convert_item, convert_items, render_mode};

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Base name of the rotated log files
pub const LOG_FILE_PREFIX: &str = "nexcraft.log";

/// Initialize the tracing subscriber for logging
///
/// Console output goes to stderr, filtered by `RUST_LOG` or `console_filter`.
/// When `log_dir` is given, `nexcraft=info` events are also written to a
/// daily-rotated file in that directory; keep the returned guard alive until
/// exit so buffered lines are flushed.
pub fn init_tracing(console_filter: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_filter));
    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new("nexcraft=info"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
