//! Core analyze tests for reframe-native.
//!
//! These drive the engine slot and call paths without NAPI bindings. The
//! slot is process-wide, so every test runs serially.

use std::sync::Mutex;

use async_trait::async_trait;
use reframe_bridge::{AnalysisOperation, AnalysisRequest, BridgeError, OperationArgs};
use reframe_native::core::{analyze_blocking, analyze_nonblocking, CallError};
use reframe_native::registry::{
    install_engine, minify_supported, set_minify_support, uninstall_engine,
};
use serde_json::json;
use serial_test::serial;

#[derive(Debug, thiserror::Error)]
#[error("grammar for {0} not loaded")]
struct GrammarMissing(String);

/// Engine that echoes its arguments back as a JSON report.
#[derive(Default)]
struct EchoEngine {
    seen: Mutex<Vec<OperationArgs>>,
}

impl EchoEngine {
    fn report(&self, args: &OperationArgs) -> Result<String, GrammarMissing> {
        self.seen.lock().unwrap().push(args.clone());
        if args.path.ends_with(".cob") {
            return Err(GrammarMissing(args.path.clone()));
        }
        Ok(json!({
            "path": args.path,
            "env": args.env,
            "minify": args.minify,
            "len": args.content.len(),
        })
        .to_string())
    }
}

#[async_trait]
impl AnalysisOperation for EchoEngine {
    type Error = GrammarMissing;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        self.report(args)
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        tokio::task::yield_now().await;
        self.report(args)
    }
}

/// Engine whose payload is never JSON.
struct GarbageEngine;

#[async_trait]
impl AnalysisOperation for GarbageEngine {
    type Error = GrammarMissing;

    fn analyze_sync(&self, _args: &OperationArgs) -> Result<String, Self::Error> {
        Ok("<html>".to_string())
    }

    async fn analyze_async(&self, _args: &OperationArgs) -> Result<String, Self::Error> {
        Ok("<html>".to_string())
    }
}

fn reset() {
    uninstall_engine();
    set_minify_support(true);
}

#[test]
#[serial]
fn test_no_engine_installed() {
    reset();

    let result = analyze_blocking(AnalysisRequest::new("a.js", "x"));
    assert!(matches!(result, Err(CallError::NoEngine)));
}

#[tokio::test]
#[serial]
async fn test_no_engine_installed_async() {
    reset();

    let result = analyze_nonblocking(AnalysisRequest::new("a.js", "x")).await;
    assert!(matches!(result, Err(CallError::NoEngine)));
}

#[test]
#[serial]
fn test_blocking_uses_defaults() {
    reset();
    install_engine(EchoEngine::default());

    let report = analyze_blocking(AnalysisRequest::new("app/page.tsx", "abc")).unwrap();
    assert_eq!(
        report,
        json!({"path": "app/page.tsx", "env": "server", "minify": true, "len": 3})
    );

    reset();
}

#[tokio::test]
#[serial]
async fn test_nonblocking_matches_blocking() {
    reset();
    install_engine(EchoEngine::default());

    let request = AnalysisRequest::new("lib.ts", "export {}")
        .env("client")
        .minify(false);
    let blocking = analyze_blocking(request.clone()).unwrap();
    let nonblocking = analyze_nonblocking(request).await.unwrap();
    assert_eq!(blocking, nonblocking);
    assert_eq!(nonblocking["env"], "client");
    assert_eq!(nonblocking["minify"], false);

    reset();
}

#[test]
#[serial]
fn test_minify_dropped_when_unsupported() {
    reset();
    install_engine(EchoEngine::default());
    set_minify_support(false);
    assert!(!minify_supported());

    let report = analyze_blocking(AnalysisRequest::new("a.js", "").minify(false)).unwrap();
    assert_eq!(report["minify"], serde_json::Value::Null);

    reset();
    assert!(minify_supported());
}

#[test]
#[serial]
fn test_engine_failure_is_external() {
    reset();
    install_engine(EchoEngine::default());

    let err = analyze_blocking(AnalysisRequest::new("legacy.cob", "")).unwrap_err();
    match err {
        CallError::Bridge(BridgeError::External(cause)) => {
            let inner = cause.downcast_ref::<GrammarMissing>().unwrap();
            assert_eq!(inner.0, "legacy.cob");
        }
        other => panic!("Expected External, got {:?}", other),
    }

    reset();
}

#[tokio::test]
#[serial]
async fn test_malformed_payload() {
    reset();
    install_engine(GarbageEngine);

    let err = analyze_nonblocking(AnalysisRequest::new("a.js", "")).await.unwrap_err();
    assert!(matches!(
        err,
        CallError::Bridge(BridgeError::MalformedResult(_))
    ));

    reset();
}

#[test]
#[serial]
fn test_replacing_engine() {
    reset();
    install_engine(GarbageEngine);
    assert!(analyze_blocking(AnalysisRequest::new("a.js", "")).is_err());

    install_engine(EchoEngine::default());
    assert!(analyze_blocking(AnalysisRequest::new("a.js", "")).is_ok());

    assert!(uninstall_engine());
    assert!(!uninstall_engine());
}
