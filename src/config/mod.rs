//! Settings loading for cmdkit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use cmdkit::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".cmdkit.yml"),
//!     "settings:\n  max_line_length: 80\n",
//! )
//! .unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.settings.max_line_length, 80);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{CmdKitConfig, Settings};
