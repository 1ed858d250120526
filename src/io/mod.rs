pub mod output;

pub use output::{create_writer, format_currency, OutputFormat, OutputWriter};

use std::path::Path;

use crate::errors::CalcError;

/// Write a file, mapping failures to a path-carrying error.
pub fn write_file(path: &Path, contents: &str) -> Result<(), CalcError> {
    std::fs::write(path, contents).map_err(|e| CalcError::io_with_path(e.to_string(), path))
}
