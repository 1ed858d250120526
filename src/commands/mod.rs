pub mod estimate;
pub mod industries;
pub mod init;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{self, RoimapConfig};

/// Resolve configuration: an explicit path is strict, discovery is lenient.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<RoimapConfig> {
    match path {
        Some(p) => config::load_config_from(p)
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => Ok(config::load_config()),
    }
}

/// Open the output destination: a file if given, stdout otherwise.
pub(crate) fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = fs::File::create(p)
                .with_context(|| format!("failed to create output file {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
