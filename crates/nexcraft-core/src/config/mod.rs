//! Configuration system for nexcraft
//!
//! A run is configured from, in increasing priority:
//! - built-in defaults ([`ConverterConfig::default`])
//! - a config file (`nexcraft.yaml`, `nexcraft.yml`, `nexcraft.toml` or
//!   `nexcraft.json`), found by walking up from the working directory
//! - command-line flags and the `NAMESPACE` environment variable
//!
//! ## Example Configuration
//!
//! ```yaml
//! namespace: mypack
//! input: input
//! output: output
//! logs: logs
//! folder-blacklist:
//!   - nexo_defaults
//! pack:
//!   author: Someone
//!   version: 1.0.0
//!   description: My converted pack
//! ```

mod loader;
mod settings;

pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use settings::{ConverterConfig, PackMetadata};
