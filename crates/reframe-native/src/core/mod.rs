//! Call paths behind the NAPI functions (no NAPI dependencies).

pub mod analyze;
pub mod configure;

pub use analyze::{analyze_blocking, analyze_nonblocking, CallError};
pub use configure::apply_config;
