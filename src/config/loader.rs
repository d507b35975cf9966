//! Settings file discovery and loading.

use crate::config::schema::CmdKitConfig;
use crate::error::{CmdKitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file looked up from the working directory.
pub const CONFIG_FILE_NAME: &str = ".cmdkit.yml";

/// Find the settings file by walking up from `start`.
///
/// The search stops at the first directory containing `.git`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if current.join(".git").exists() || !current.pop() {
            return None;
        }
    }
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CmdKitConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CmdKitError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CmdKitError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`CmdKitConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CmdKitConfig> {
    if content.trim().is_empty() {
        return Ok(CmdKitConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| CmdKitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings for an invocation.
///
/// An explicit path must exist. Otherwise `.cmdkit.yml` is searched from
/// `cwd` upwards, and defaults are used when none is found.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<CmdKitConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(cwd) {
            Some(path) => path,
            None => {
                tracing::debug!(cwd = %cwd.display(), "no settings file found, using defaults");
                return Ok(CmdKitConfig::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading settings");
    load_config_file(&path)
}
