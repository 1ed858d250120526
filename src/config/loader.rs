//! Configuration file discovery and parsing.
//!
//! `.roimap.toml` is searched for in the current directory and its ancestors.
//! Discovery is lenient: unreadable or invalid files warn and fall back to
//! defaults. An explicitly passed path (`--config`) is strict instead.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::RoimapConfig;
use crate::errors::CalcError;

const CONFIG_FILE_NAME: &str = ".roimap.toml";

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config from TOML text.
pub fn parse_and_validate_config(contents: &str) -> Result<RoimapConfig, String> {
    toml::from_str::<RoimapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

fn try_load_config_from_path(config_path: &Path) -> Option<RoimapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // "file not found" is the normal case while walking ancestors
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.roimap.toml`, or defaults.
pub fn load_config() -> RoimapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return RoimapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoimapConfig::default()
        })
}

/// Load configuration from an explicit path. Unlike discovery, failures here
/// are reported to the caller.
pub fn load_config_from(path: &Path) -> Result<RoimapConfig, CalcError> {
    let contents =
        read_config_file(path).map_err(|e| CalcError::io_with_path(e.to_string(), path))?;
    parse_and_validate_config(&contents).map_err(|e| CalcError::config_with_path(e, path))
}
