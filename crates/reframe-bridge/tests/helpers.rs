//! Shared test utilities for reframe-bridge tests
//!
//! Provides a scripted engine double that records every argument set it
//! receives and answers with a canned outcome.

#![allow(dead_code)]

use async_trait::async_trait;
use reframe_bridge::{AnalysisOperation, OperationArgs};
use std::sync::Mutex;

/// Engine failure used by the doubles. Compared by value in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("engine rejected {path}: {reason}")]
pub struct EngineFailure {
    pub path: String,
    pub reason: String,
}

/// What the scripted engine answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Payload(String),
    Fail(EngineFailure),
}

/// Engine double that records calls per invocation style.
#[derive(Debug)]
pub struct ScriptedEngine {
    outcome: Outcome,
    pub sync_calls: Mutex<Vec<OperationArgs>>,
    pub async_calls: Mutex<Vec<OperationArgs>>,
}

impl ScriptedEngine {
    pub fn returning(payload: &str) -> Self {
        Self::with_outcome(Outcome::Payload(payload.to_string()))
    }

    pub fn failing(failure: EngineFailure) -> Self {
        Self::with_outcome(Outcome::Fail(failure))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            sync_calls: Mutex::new(Vec::new()),
            async_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_sync(&self) -> Option<OperationArgs> {
        self.sync_calls.lock().unwrap().last().cloned()
    }

    pub fn last_async(&self) -> Option<OperationArgs> {
        self.async_calls.lock().unwrap().last().cloned()
    }

    fn answer(&self) -> Result<String, EngineFailure> {
        match &self.outcome {
            Outcome::Payload(p) => Ok(p.clone()),
            Outcome::Fail(f) => Err(f.clone()),
        }
    }
}

#[async_trait]
impl AnalysisOperation for ScriptedEngine {
    type Error = EngineFailure;

    fn analyze_sync(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        self.sync_calls.lock().unwrap().push(args.clone());
        self.answer()
    }

    async fn analyze_async(&self, args: &OperationArgs) -> Result<String, Self::Error> {
        self.async_calls.lock().unwrap().push(args.clone());
        tokio::task::yield_now().await;
        self.answer()
    }
}

pub fn failure(reason: &str) -> EngineFailure {
    EngineFailure {
        path: "src/page.tsx".to_string(),
        reason: reason.to_string(),
    }
}
