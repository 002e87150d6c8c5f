//! Core route definition types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// HTTP method a route can be registered under.
///
/// Only GET and POST are supported. Definitions carrying any other
/// method are skipped during route compilation, so the enum never
/// needs to represent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Parse an exact method string.
    ///
    /// Returns `None` for anything other than `"GET"` or `"POST"` -
    /// no case folding, matching the exact-string dispatch contract.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned request shape stored alongside a route definition.
///
/// Kept for documentation value in the definition files; dispatch
/// matches on method and path only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct RequestSpec {
    pub header: HashMap<String, String>,
    pub body: String,
}

/// Canned response replayed for every request matching the route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseSpec {
    pub status_code: u16,
    #[serde(default)]
    pub header: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

/// Mock route definition, one per config file.
///
/// Immutable once loaded; ownership moves from the loader into the
/// compiled handler closure, so concurrent requests never share
/// mutable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RouteDefinition {
    pub path: String,
    /// Raw method string as written in the file; validated during
    /// route compilation rather than at parse time, so an unsupported
    /// method is a skippable diagnostic instead of a load failure.
    pub method: String,
    #[serde(default)]
    pub request: RequestSpec,
    pub response: ResponseSpec,
}
