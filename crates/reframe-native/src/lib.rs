#![deny(clippy::all)]

//! Native Node.js bindings for the Reframe analysis bridge
//!
//! The embedding host links its analysis engine into this addon and calls
//! [`install_engine`] once at startup. JavaScript then reaches the engine
//! through `analyze` (blocking) and `analyzeAsync` (Promise).

pub mod api;
pub mod core;
pub mod error;
pub mod error_mapper;
pub mod registry;
pub mod types;

// Re-export public API
pub use api::{analyze, analyze_async, configure, version};
pub use registry::{install_engine, install_shared, uninstall_engine, SharedOperation};
