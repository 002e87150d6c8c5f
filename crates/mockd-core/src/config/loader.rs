//! Recursive definition discovery.

use crate::config::error::ConfigError;
use crate::config::parser;
use crate::types::route::RouteDefinition;
use std::fs;
use std::io;
use std::path::Path;

/// Load every route definition under `dir`, recursively.
///
/// Subdirectories are traversed; every non-directory entry is parsed
/// as one definition. Files are visited in the traversal's sorted
/// order, which makes duplicate-key overrides deterministic. Any
/// unreadable or malformed file aborts the load.
pub fn load_definitions(dir: &Path) -> Result<Vec<RouteDefinition>, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::Io {
            path: dir.to_owned(),
            source: io::Error::new(io::ErrorKind::NotFound, "definitions directory not found"),
        });
    }

    let pattern = dir.join("**").join("*");
    let mut definitions = Vec::new();

    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_dir() {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        definitions.push(parser::parse_definition(&content, &path)?);
    }

    Ok(definitions)
}
