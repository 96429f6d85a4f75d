//! CLI command implementations
//!
//! - commands/convert.rs - pack conversion
//! - commands/init.rs - working folder bootstrap

pub mod convert;
pub mod init;

use std::fs;
use std::path::{Path, PathBuf};

/// Make sure the log directory exists, optionally clearing old log files
///
/// Returns `None` when the directory cannot be created; the run then logs to
/// the console only.
pub fn prepare_log_dir(dir: &Path, clear: bool) -> Option<PathBuf> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
        return None;
    }

    if clear {
        let removed = clear_log_files(dir);
        if removed > 0 {
            eprintln!("Cleared {} old log file(s)", removed);
        }
    }

    Some(dir.to_path_buf())
}

/// Delete regular files directly inside `dir`, returning how many were removed
fn clear_log_files(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| fs::remove_file(path).is_ok())
        .count()
}
