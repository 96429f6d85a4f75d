//! Configuration file discovery and loading

use super::settings::ConverterConfig;
use crate::{NexcraftError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names, in lookup priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "nexcraft.yaml",
    "nexcraft.yml",
    "nexcraft.toml",
    "nexcraft.json",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Tries every name in [`CONFIG_FILE_NAMES`] in each directory before
    /// moving to the parent, until the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| NexcraftError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    ///
    /// Supports YAML (.yaml, .yml), TOML (.toml) and JSON (.json)
    pub fn load_from_file(path: &Path) -> Result<ConverterConfig> {
        let content = fs::read_to_string(path).map_err(|e| NexcraftError::io_error(path, e))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed: std::result::Result<ConverterConfig, String> = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            "toml" => toml::from_str(&content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            other => {
                return Err(NexcraftError::config_error(format!(
                    "Unsupported config format '{}' for {}",
                    other,
                    path.display()
                )));
            }
        };

        let config = parsed.map_err(|message| {
            NexcraftError::config_error(format!(
                "Failed to load config from '{}': {}",
                path.display(),
                message
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from path or auto-discover
    ///
    /// An explicit path must exist. Without one, the nearest config file
    /// above `start_dir` (or the current directory) is used; when none is
    /// found the defaults apply.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ConverterConfig> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(NexcraftError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(ConverterConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), "nexcraft.yaml", "namespace: gems\n");

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.namespace, "gems");
    }

    #[test]
    fn test_load_from_file_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(
            temp_dir.path(),
            "nexcraft.toml",
            r#"
namespace = "gems"
folder-blacklist = ["drafts", "nexo_defaults"]

[pack]
author = "Someone"
"#,
        );

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.namespace, "gems");
        assert_eq!(config.folder_blacklist.len(), 2);
        assert_eq!(config.pack.author, "Someone");
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(
            temp_dir.path(),
            "nexcraft.json",
            r#"{ "namespace": "gems", "output": "build" }"#,
        );

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.output, PathBuf::from("build"));
    }

    #[test]
    fn test_load_from_file_invalid_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_temp_config(temp_dir.path(), "nexcraft.yml", "namespace: \"Bad Name\"\n");

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Bad Name"));
    }

    #[test]
    fn test_auto_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "nexcraft.yml", "namespace: parent\n");
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let found = ConfigLoader::auto_discover(&nested).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "nexcraft.yml");

        let config = ConfigLoader::load(None, Some(&nested)).unwrap();
        assert_eq!(config.namespace, "parent");
    }

    #[test]
    fn test_yaml_preferred_over_toml() {
        let temp_dir = TempDir::new().unwrap();
        create_temp_config(temp_dir.path(), "nexcraft.toml", "namespace = \"from_toml\"\n");
        create_temp_config(temp_dir.path(), "nexcraft.yaml", "namespace: from_yaml\n");

        let config = ConfigLoader::load(None, Some(temp_dir.path())).unwrap();
        assert_eq!(config.namespace, "from_yaml");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yaml");
        assert!(ConfigLoader::load(Some(&missing), None).is_err());
    }
}
