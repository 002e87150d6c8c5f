//! Error types for definition loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading route definitions from disk.
///
/// Every variant is fatal to startup: a broken definitions tree is a
/// configuration error, not a recoverable runtime condition.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File or directory could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// JSON parsing error
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// YAML parsing error
    #[error("failed to parse {} as YAML: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Definitions directory produced an invalid glob pattern
    #[error("invalid definitions pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Directory traversal failed mid-walk
    #[error("failed to walk definitions directory: {0}")]
    Walk(#[from] glob::GlobError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_io_error_display() {
        let error = ConfigError::Io {
            path: PathBuf::from("data/health.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = format!("{}", error);
        assert!(display.contains("failed to read"));
        assert!(display.contains("data/health.json"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ConfigError::Json {
            path: PathBuf::from("data/bad.json"),
            source,
        };
        let display = format!("{}", error);
        assert!(display.contains("as JSON"));
        assert!(display.contains("data/bad.json"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_yaml_error_display() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("invalid: yaml: [").unwrap_err();
        let error = ConfigError::Yaml {
            path: PathBuf::from("data/bad.yaml"),
            source,
        };
        let display = format!("{}", error);
        assert!(display.contains("as YAML"));
        assert!(display.contains("data/bad.yaml"));
        assert!(error.source().is_some());
    }
}
