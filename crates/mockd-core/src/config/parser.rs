//! Definition file parsing (JSON/YAML).

use crate::config::error::ConfigError;
use crate::types::route::RouteDefinition;
use std::path::Path;

/// Definition file type, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    Yaml,
}

/// Get the definition file type from the path extension.
///
/// Everything that is not `.yaml`/`.yml` is treated as JSON, keeping
/// the loader contract that every non-directory entry holds exactly
/// one definition.
pub fn file_type(path: &Path) -> FileType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => FileType::Yaml,
        _ => FileType::Json,
    }
}

/// Parse one definition file's content based on its file type.
pub fn parse_definition(content: &str, path: &Path) -> Result<RouteDefinition, ConfigError> {
    match file_type(path) {
        FileType::Json => serde_json::from_str(content).map_err(|source| ConfigError::Json {
            path: path.to_owned(),
            source,
        }),
        FileType::Yaml => serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.to_owned(),
            source,
        }),
    }
}
