//! Conversion run orchestration
//!
//! [`Converter::convert`] walks the item folder of a Nexo pack and, for every
//! source file in order: load -> deduplicate -> convert -> register the
//! file's subcategory and locale entries. Nothing is written until the whole
//! tree has been consumed; then the item documents, `i18n.yml`,
//! `categories.yml`, `templates.yml` and the custom model data report are
//! flushed in one pass.
//!
//! Output layout under the output root:
//!
//! ```text
//! configuration/
//!   items/<relative source path>   one per file that produced converted items
//!   i18n.yml
//!   categories.yml
//!   templates.yml
//!   custom-model-data.txt
//! ```

use crate::categories::CategoryBuilder;
use crate::dedup::DeduplicationGate;
use crate::diagnostics::{DiagnosticCollector, DiagnosticSink, Level};
use crate::discovery::{DEFAULT_BLACKLIST, YamlFileDiscovery};
use crate::document::{DocumentStore, YamlStore, load_items};
use crate::identifiers::IdentifierTracker;
use crate::locale::LocaleTable;
use crate::model::ItemDocument;
use crate::templates::template_document;
use crate::transform::convert_items;
use crate::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIGURATION_DIR: &str = "configuration";
pub const ITEMS_DIR: &str = "items";
pub const LOCALE_FILE: &str = "i18n.yml";
pub const CATEGORIES_FILE: &str = "categories.yml";
pub const TEMPLATES_FILE: &str = "templates.yml";
pub const IDENTIFIER_REPORT_FILE: &str = "custom-model-data.txt";

/// Paths of every artifact a run writes
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn configuration_dir(&self) -> PathBuf {
        self.root.join(CONFIGURATION_DIR)
    }

    /// Where the converted items of `relative` (a path under the input root) go
    pub fn item_document(&self, relative: &Path) -> PathBuf {
        self.configuration_dir().join(ITEMS_DIR).join(relative)
    }

    pub fn locale(&self) -> PathBuf {
        self.configuration_dir().join(LOCALE_FILE)
    }

    pub fn categories(&self) -> PathBuf {
        self.configuration_dir().join(CATEGORIES_FILE)
    }

    pub fn templates(&self) -> PathBuf {
        self.configuration_dir().join(TEMPLATES_FILE)
    }

    pub fn identifier_report(&self) -> PathBuf {
        self.configuration_dir().join(IDENTIFIER_REPORT_FILE)
    }
}

/// Counters for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Source files discovered
    pub files_found: usize,
    /// Files that produced at least one converted item
    pub files_converted: usize,
    /// Files that failed to load or produced no items
    pub files_skipped: usize,
    pub items_converted: usize,
    pub duplicates_dropped: usize,
    /// Items that matched no render mode
    pub items_unrendered: usize,
    pub collisions: usize,
    pub documents_written: usize,
    pub write_errors: usize,
}

impl ConversionSummary {
    pub fn has_errors(&self) -> bool {
        self.write_errors > 0
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items converted from {} of {} files",
            self.items_converted, self.files_converted, self.files_found
        )?;
        if self.duplicates_dropped > 0 {
            write!(f, ", {} duplicates dropped", self.duplicates_dropped)?;
        }
        if self.collisions > 0 {
            write!(f, ", {} identifier collisions", self.collisions)?;
        }
        if self.write_errors > 0 {
            write!(f, ", {} write errors", self.write_errors)?;
        }
        Ok(())
    }
}

/// Summary plus every diagnostic raised during the run
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub summary: ConversionSummary,
    pub diagnostics: DiagnosticCollector,
    /// Rendered custom model data ranges, one line per material
    pub identifier_report: String,
}

impl ConversionReport {
    pub fn warning_count(&self) -> usize {
        self.diagnostics.count(Level::Warning)
    }
}

/// Mutable state owned by a single run
struct RunState {
    gate: DeduplicationGate,
    tracker: IdentifierTracker,
    categories: CategoryBuilder,
    locale: LocaleTable,
    item_documents: Vec<(PathBuf, ItemDocument)>,
    summary: ConversionSummary,
}

impl RunState {
    fn new(namespace: &str) -> Self {
        let mut locale = LocaleTable::default();
        locale.record_category(namespace, "name", namespace);
        locale.record_category(namespace, "lore", format!("{namespace} Items"));

        Self {
            gate: DeduplicationGate::new(),
            tracker: IdentifierTracker::new(),
            categories: CategoryBuilder::new(namespace),
            locale,
            item_documents: Vec::new(),
            summary: ConversionSummary::default(),
        }
    }
}

/// Converts a tree of Nexo item files into CraftEngine configuration
#[derive(Debug, Clone)]
pub struct Converter<S = YamlStore> {
    store: S,
    blacklist: Vec<String>,
}

impl Default for Converter<YamlStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<YamlStore> {
    pub fn new() -> Self {
        Self::with_store(YamlStore::new())
    }
}

impl<S: DocumentStore> Converter<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Directory names to skip while walking the input tree
    pub fn with_blacklist(mut self, blacklist: Vec<String>) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Convert every item file under `input_root` into `output_root`
    ///
    /// Only an unreadable input root fails the run; every per-file or
    /// per-item problem is recorded in the returned report.
    pub fn convert(
        &self,
        input_root: &Path,
        output_root: &Path,
        namespace: &str,
    ) -> Result<ConversionReport> {
        let mut diagnostics = DiagnosticCollector::new();
        let (summary, identifier_report) =
            self.convert_with_sink(input_root, output_root, namespace, &mut diagnostics)?;
        Ok(ConversionReport {
            summary,
            diagnostics,
            identifier_report,
        })
    }

    /// Like [`Converter::convert`], reporting to a caller-provided sink
    pub fn convert_with_sink<D>(
        &self,
        input_root: &Path,
        output_root: &Path,
        namespace: &str,
        sink: &mut D,
    ) -> Result<(ConversionSummary, String)>
    where
        D: DiagnosticSink + ?Sized,
    {
        let discovered = YamlFileDiscovery::new(input_root)
            .with_blacklist(self.blacklist.clone())
            .discover()?;
        for message in discovered.skipped {
            sink.warn(message);
        }
        let files = discovered.files;
        sink.info(format!("Found {} YAML files to process.", files.len()));

        let mut state = RunState::new(namespace);
        state.summary.files_found = files.len();

        for file in &files {
            self.process_file(input_root, file, namespace, &mut state, sink);
        }

        let identifier_report = state.tracker.report();
        self.flush(OutputLayout::new(output_root), namespace, state, &identifier_report, sink)
            .map(|summary| (summary, identifier_report))
    }

    fn process_file<D>(
        &self,
        input_root: &Path,
        file: &Path,
        namespace: &str,
        state: &mut RunState,
        sink: &mut D,
    ) where
        D: DiagnosticSink + ?Sized,
    {
        let relative = file.strip_prefix(input_root).unwrap_or(file);

        let Some(items) = load_items(&self.store, file, sink) else {
            state.summary.files_skipped += 1;
            return;
        };

        let dedup = state.gate.filter(namespace, file, items, sink);
        state.summary.duplicates_dropped += dedup.duplicates.len();
        if dedup.survivors.is_empty() {
            sink.warn(format!(
                "Every item in {} is a duplicate; skipping file",
                file.display()
            ));
            state.summary.files_skipped += 1;
            return;
        }

        let outcome = convert_items(namespace, &dedup.survivors, &mut state.tracker, sink);
        for key in &outcome.unrendered {
            debug!("Item {}:{} has neither a model nor a texture", namespace, key);
        }
        state.summary.items_unrendered += outcome.unrendered.len();
        state.summary.collisions += outcome.collisions.len();

        for (key, item) in &dedup.survivors {
            state
                .locale
                .record_item(namespace, key, item.display_name(key));
        }

        let converted_keys: Vec<String> = outcome.items.keys().cloned().collect();
        let subcategory_name = relative
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let subcategory =
            state
                .categories
                .register_subcategory(&subcategory_name, converted_keys, sink);
        if let Some(subcategory) = &subcategory {
            state
                .locale
                .record_category(namespace, &subcategory_name, subcategory_name.as_str());
            sink.info(format!(
                "Created subcategory: {} with {} items",
                subcategory,
                outcome.items.len()
            ));
        }

        if outcome.items.is_empty() {
            state.summary.files_skipped += 1;
            return;
        }

        // Converted items keep their document even when the subcategory is skipped
        state.summary.files_converted += 1;
        state.summary.items_converted += outcome.items.len();
        state.item_documents.push((
            relative.to_path_buf(),
            ItemDocument {
                items: outcome.items,
            },
        ));
    }

    fn flush<D>(
        &self,
        layout: OutputLayout,
        namespace: &str,
        state: RunState,
        identifier_report: &str,
        sink: &mut D,
    ) -> Result<ConversionSummary>
    where
        D: DiagnosticSink + ?Sized,
    {
        let RunState {
            categories,
            locale,
            item_documents,
            mut summary,
            ..
        } = state;

        for (relative, document) in &item_documents {
            let path = layout.item_document(relative);
            self.record_write(self.store.write(&path, document), &path, &mut summary, sink);
        }

        let path = layout.locale();
        self.record_write(
            self.store.write(&path, &locale.into_document()),
            &path,
            &mut summary,
            sink,
        );

        let path = layout.categories();
        self.record_write(
            self.store.write(&path, &categories.into_document()),
            &path,
            &mut summary,
            sink,
        );

        let path = layout.templates();
        self.record_write(
            self.store.write(&path, &template_document(namespace)),
            &path,
            &mut summary,
            sink,
        );

        let path = layout.identifier_report();
        let mut text = identifier_report.to_string();
        if !text.is_empty() {
            text.push('\n');
        }
        self.record_write(
            self.store.write_text(&path, &text),
            &path,
            &mut summary,
            sink,
        );

        info!("{}", summary);
        Ok(summary)
    }

    fn record_write<D>(
        &self,
        result: Result<()>,
        path: &Path,
        summary: &mut ConversionSummary,
        sink: &mut D,
    ) where
        D: DiagnosticSink + ?Sized,
    {
        match result {
            Ok(()) => {
                summary.documents_written += 1;
                sink.info(format!("Wrote {}", path.display()));
            }
            Err(e) => {
                summary.write_errors += 1;
                sink.error(format!("Failed to write {}: {}", path.display(), e));
            }
        }
    }
}
