//! Converter settings

use crate::discovery::DEFAULT_BLACKLIST;
use crate::{NexcraftError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConverterConfig {
    /// Namespace prefixed to every generated key
    pub namespace: String,

    /// Nexo pack root; items are read from `<input>/items`
    pub input: PathBuf,

    /// CraftEngine pack root
    pub output: PathBuf,

    /// Log directory
    pub logs: PathBuf,

    /// Directory names skipped while walking the item folder
    pub folder_blacklist: Vec<String>,

    /// Values written to `pack.yml`
    pub pack: PackMetadata,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            input: PathBuf::from("input"),
            output: PathBuf::from("output"),
            logs: PathBuf::from("logs"),
            folder_blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
            pack: PackMetadata::default(),
        }
    }
}

/// Pack manifest metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackMetadata {
    pub author: String,
    pub version: String,
    pub description: String,
}

impl Default for PackMetadata {
    fn default() -> Self {
        Self {
            author: "Unknown".to_string(),
            version: "0.0.1".to_string(),
            description: "Craft Engine Pack".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Folder holding the Nexo item definitions
    pub fn items_dir(&self) -> PathBuf {
        self.input.join("items")
    }

    /// Check values that would produce unusable keys
    pub fn validate(&self) -> Result<()> {
        let namespace = self.namespace.as_str();
        if namespace.is_empty() {
            return Err(NexcraftError::config_error("namespace must not be empty"));
        }
        if !namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.'))
        {
            return Err(NexcraftError::config_error(format!(
                "namespace '{namespace}' may only contain a-z, 0-9, '_', '-' and '.'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.namespace, "minecraft");
        assert_eq!(config.items_dir(), PathBuf::from("input/items"));
        assert_eq!(config.folder_blacklist, vec!["nexo_defaults".to_string()]);
        assert_eq!(config.pack.author, "Unknown");
        assert_eq!(config.pack.version, "0.0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ConverterConfig = serde_yaml::from_str(
            r#"
namespace: mypack
folder-blacklist: [drafts]
pack:
  author: Someone
"#,
        )
        .unwrap();

        assert_eq!(config.namespace, "mypack");
        assert_eq!(config.folder_blacklist, vec!["drafts".to_string()]);
        assert_eq!(config.pack.author, "Someone");
        assert_eq!(config.pack.description, "Craft Engine Pack");
        assert_eq!(config.output, PathBuf::from("output"));
    }

    #[test]
    fn test_validate_rejects_bad_namespace() {
        let mut config = ConverterConfig {
            namespace: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.namespace = "My Pack".to_string();
        assert!(config.validate().is_err());
    }
}
