//! Structured document I/O
//!
//! [`DocumentStore`] is the read/write capability the engine depends on.
//! [`YamlStore`] backs it with YAML files on disk.

use crate::diagnostics::DiagnosticSink;
use crate::model::ItemDefinition;
use crate::{NexcraftError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and write structured documents
pub trait DocumentStore {
    /// Parse the document at `path` into a top-level mapping
    fn read(&self, path: &Path) -> Result<Mapping>;

    /// Serialize `value` and write it to `path`, creating parent directories
    fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()>;

    /// Write plain text to `path`, creating parent directories
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}

/// Filesystem-backed YAML documents
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlStore;

impl YamlStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| NexcraftError::io_error(parent, e))?;
        }
        Ok(())
    }
}

impl DocumentStore for YamlStore {
    fn read(&self, path: &Path) -> Result<Mapping> {
        let content = fs::read_to_string(path).map_err(|e| NexcraftError::io_error(path, e))?;
        let value: Value = serde_yaml::from_str(&content)
            .map_err(|e| NexcraftError::parse_error(path, e.to_string()))?;

        match value {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Err(NexcraftError::parse_error(path, "document is empty")),
            _ => Err(NexcraftError::parse_error(
                path,
                "top level of the document is not a mapping",
            )),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let yaml = serde_yaml::to_string(value)
            .map_err(|e| NexcraftError::serialize_error(path, e.to_string()))?;
        self.write_text(path, &yaml)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        Self::ensure_parent(path)?;
        fs::write(path, text).map_err(|e| NexcraftError::io_error(path, e))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Load the item definitions of one source file
///
/// Returns `None`, with a warning, when the file cannot be read or parsed or
/// holds no items. Entries that are not valid item definitions are skipped
/// individually.
pub fn load_items<S, D>(
    store: &S,
    path: &Path,
    sink: &mut D,
) -> Option<IndexMap<String, ItemDefinition>>
where
    S: DocumentStore,
    D: DiagnosticSink + ?Sized,
{
    let mapping = match store.read(path) {
        Ok(mapping) => mapping,
        Err(e) => {
            sink.warn(format!("Failed to read YAML {}: {}", path.display(), e));
            return None;
        }
    };

    let mut items = IndexMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        let Some(key) = key_to_string(&key) else {
            sink.warn(format!(
                "Skipping entry with non-scalar key in {}",
                path.display()
            ));
            continue;
        };

        match serde_yaml::from_value::<ItemDefinition>(value) {
            Ok(item) => {
                items.insert(key, item);
            }
            Err(e) => sink.warn(format!(
                "Skipping malformed item '{}' in {}: {}",
                key,
                path.display(),
                e
            )),
        }
    }

    if items.is_empty() {
        sink.warn(format!("No item definitions in {}", path.display()));
        return None;
    }

    Some(items)
}
