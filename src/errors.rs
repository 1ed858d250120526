//! Error types for ROI estimation.
//!
//! All conditions here are local-recoverable: the engine never panics on bad
//! input. Callers that must not fail at all can use
//! [`crate::calculator::compute_breakdown_lenient`], which pairs a zeroed
//! breakdown with the condition instead of returning `Err`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Categorized error type for the estimator and its CLI surfaces.
///
/// # Categories
///
/// - `UnknownIndustry`: industry key not present in the profile registry
/// - `OutOfRangeInput`: metric outside its declared bounds (strict policy only)
/// - `ValidationError`: input or profile constraint violations
/// - `ConfigError`: configuration file issues
/// - `IoError`: file system operations (CLI output, config reads)
/// - `Other`: catch-all
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Industry key not registered in the profile registry.
    UnknownIndustry { key: String },
    /// Metric value outside its declared `[min, max]` under the strict policy.
    OutOfRangeInput {
        metric: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Input or profile constraint violations.
    ValidationError { message: String },
    /// Configuration file errors.
    ConfigError {
        message: String,
        path: Option<PathBuf>,
    },
    /// File system I/O errors.
    IoError {
        message: String,
        path: Option<PathBuf>,
    },
    /// Catch-all for other errors.
    Other(String),
}

impl CalcError {
    /// Create an unknown-industry error.
    pub fn unknown_industry(key: impl Into<String>) -> Self {
        Self::UnknownIndustry { key: key.into() }
    }

    /// Create an out-of-range input error.
    pub fn out_of_range(metric: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRangeInput {
            metric: metric.into(),
            value,
            min,
            max,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::IoError {
            message: message.into(),
            path: None,
        }
    }

    /// Create an I/O error with path context.
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::IoError {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an error from any message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownIndustry { .. } => "UnknownIndustry",
            Self::OutOfRangeInput { .. } => "OutOfRangeInput",
            Self::ValidationError { .. } => "Validation",
            Self::ConfigError { .. } => "Config",
            Self::IoError { .. } => "I/O",
            Self::Other(_) => "Error",
        }
    }

    /// Get the associated path, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ConfigError { path, .. } => path.as_ref(),
            Self::IoError { path, .. } => path.as_ref(),
            _ => None,
        }
    }

    /// Convert this error to an `anyhow::Error`.
    pub fn into_anyhow(self) -> anyhow::Error {
        anyhow::Error::from(self)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIndustry { key } => {
                write!(f, "Unknown industry '{}'", key)
            }
            Self::OutOfRangeInput {
                metric,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Metric '{}' value {} is outside its declared range [{}, {}]",
                    metric, value, min, max
                )
            }
            Self::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::ConfigError { message, path } => {
                write!(f, "Config error: {}", message)?;
                if let Some(p) = path {
                    write!(f, " (file: {})", p.display())?;
                }
                Ok(())
            }
            Self::IoError { message, path } => {
                write!(f, "I/O error: {}", message)?;
                if let Some(p) = path {
                    write!(f, " (path: {})", p.display())?;
                }
                Ok(())
            }
            Self::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<io::Error> for CalcError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_industry_display_names_key() {
        let err = CalcError::unknown_industry("healthcare");
        assert_eq!(err.category(), "UnknownIndustry");
        assert!(err.to_string().contains("healthcare"));
    }

    #[test]
    fn out_of_range_display_includes_bounds() {
        let err = CalcError::out_of_range("employees", 250.0, 1.0, 100.0);
        let msg = err.to_string();
        assert!(msg.contains("employees"));
        assert!(msg.contains("250"));
        assert!(msg.contains("[1, 100]"));
    }

    #[test]
    fn config_error_with_path() {
        let err = CalcError::config_with_path("bad value", "/tmp/.roimap.toml");
        assert_eq!(err.path().unwrap(), &PathBuf::from("/tmp/.roimap.toml"));
        assert!(err.to_string().contains(".roimap.toml"));
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CalcError = io_err.into();
        assert_eq!(err.category(), "I/O");
    }
}
