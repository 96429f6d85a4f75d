//! Source file discovery
//!
//! Walks the item folder of a Nexo pack and returns every YAML file in a
//! deterministic order, pruning directories whose name is blacklisted.

use crate::{NexcraftError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories Nexo ships with its own default items
pub const DEFAULT_BLACKLIST: &[&str] = &["nexo_defaults"];

/// Trait for source file discovery
pub trait FileDiscovery {
    /// Every source document under the root, in processing order
    fn discover_files(&self) -> Result<Vec<PathBuf>>;
}

/// Recursive `.yml`/`.yaml` discovery with a directory-name blacklist
#[derive(Debug, Clone)]
pub struct YamlFileDiscovery {
    pub root_dir: PathBuf,
    pub blacklist: Vec<String>,
}

impl YamlFileDiscovery {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_blacklist(mut self, blacklist: Vec<String>) -> Self {
        self.blacklist = blacklist;
        self
    }

    fn is_blacklisted(&self, entry: &DirEntry) -> bool {
        // The root itself is never pruned
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.blacklist.iter().any(|b| b == name))
    }
}

/// Whether a path has a YAML extension
pub fn is_yaml_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Result of walking the item folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFiles {
    /// Source documents in processing order
    pub files: Vec<PathBuf>,
    /// Entries below the root that could not be read, with the reason
    pub skipped: Vec<String>,
}

impl YamlFileDiscovery {
    /// Walk the root, skipping unreadable entries below it
    ///
    /// Only a missing or unreadable root is an error.
    pub fn discover(&self) -> Result<DiscoveredFiles> {
        if !self.root_dir.is_dir() {
            return Err(NexcraftError::DiscoveryError {
                message: format!("Not a directory: {}", self.root_dir.display()),
            });
        }

        let mut discovered = DiscoveredFiles::default();
        let walker = WalkDir::new(&self.root_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if self.is_blacklisted(entry) {
                    warn!("Skipped blacklisted folder: {}", entry.path().display());
                    false
                } else {
                    true
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(NexcraftError::DiscoveryError {
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    discovered
                        .skipped
                        .push(format!("Skipped unreadable entry {path}: {e}"));
                    continue;
                }
            };
            if entry.file_type().is_file() && is_yaml_file(entry.path()) {
                discovered.files.push(entry.into_path());
            }
        }

        debug!(
            "Discovered {} YAML files under {} ({} skipped)",
            discovered.files.len(),
            self.root_dir.display(),
            discovered.skipped.len()
        );
        Ok(discovered)
    }
}

impl FileDiscovery for YamlFileDiscovery {
    fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let discovered = self.discover()?;
        for message in &discovered.skipped {
            warn!("{}", message);
        }
        Ok(discovered.files)
    }
}
