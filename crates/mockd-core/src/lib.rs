//! Core library for the mockd HTTP mock server.
//!
//! Loads canned route definitions from files on disk, compiles each
//! one into a handler closure over its response, and dispatches
//! inbound requests by exact (method, path) match. Every handler is
//! wrapped in a logging decorator that captures the request body and
//! the outbound status/body without disturbing either.
//!
//! The core is purely synchronous and transport-agnostic; the HTTP
//! edge lives in `mockd-server`.

pub mod config;
pub mod logging;
pub mod request;
pub mod response;
pub mod routing;
pub mod types;
