//! Reframe analysis bridge
//!
//! Thin facades that hand a source file to the Reframe analysis engine and
//! decode the JSON document it returns. Two calling conventions are provided
//! over the same engine operation:
//!
//! - [`SyncAnalysisFacade`] blocks the caller until the engine returns.
//! - [`AsyncAnalysisFacade`] awaits the engine without stalling other tasks
//!   scheduled on the same executor.
//!
//! The engine itself is reached only through the [`AnalysisOperation`] trait.
//! [`NativeEngine`] adapts an in-process [`SourceAnalyzer`] to that trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use reframe_bridge::{AnalysisRequest, SyncAnalysisFacade};
//!
//! let facade = SyncAnalysisFacade::new(engine);
//! let report = facade.analyze(AnalysisRequest::new("src/page.tsx", source))?;
//! println!("{}", report.as_value());
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod facade;
pub mod native;
pub mod operation;
pub mod request;

#[cfg(feature = "logging")]
pub mod logging;

pub use config::{ConfigError, ReframeConfig};
pub use decode::{decode_result, AnalysisResult};
pub use error::{BridgeError, MalformedResult, Result};
pub use facade::{AsyncAnalysisFacade, SyncAnalysisFacade};
pub use native::{normalize_specifier, AnalyzerInput, NativeEngine, NativeEngineError, SourceAnalyzer};
pub use operation::AnalysisOperation;
pub use request::{AnalysisRequest, OperationArgs, DEFAULT_ENV, DEFAULT_MINIFY};

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_logging_from_config, init_logging_from_env, LogLevel};
