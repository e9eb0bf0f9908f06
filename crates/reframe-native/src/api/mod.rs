//! NAPI bindings for reframe-native.
//!
//! This module contains the public API exposed to Node.js through NAPI.

mod functions;

pub use functions::{analyze, analyze_async, configure, init_logging, init_logging_from_env, version};
