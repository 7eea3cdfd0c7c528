//! HTTP transport for the mock cloud server
//!
//! Serves the SDK source, the synthetic log feed and per-resource status lookups.

pub mod handlers;
