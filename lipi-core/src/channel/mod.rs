//! Method-channel transport layer.
//!
//! Mirrors the host shell's call contract: a named channel carries one
//! synchronous request and returns one response envelope.
//!
//! ## Envelope
//!
//! | Outcome | JSON |
//! |---------|------|
//! | success | `{"status":"ok","value":[…]}` |
//! | failure | `{"status":"error","code":"TRANSLIT_ERROR","message":"…"}` |
//! | unknown method | `{"status":"notImplemented"}` |
//!
//! `notImplemented` is deliberately distinct from `error`: it tells the
//! caller "you called the wrong method", not "the method failed".

pub mod registry;

pub use registry::ChannelRegistry;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TranslitError;

/// One inbound call on a method channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    /// Name of the requested operation, e.g. `"translitBatch"`.
    pub method: String,
    /// Operation arguments; `null` when the caller sent none.
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Outcome of a method call, exactly as placed on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResult {
    /// The operation ran to completion; `value` is its result.
    Ok { value: Value },
    /// The operation ran and failed as a whole.
    Error { code: String, message: String },
    /// The channel has no such operation (or no handler at all).
    NotImplemented,
}

impl MethodResult {
    pub fn ok(value: Value) -> Self {
        MethodResult::Ok { value }
    }

    /// Build the error envelope for a batch-level failure.
    pub fn error(err: &TranslitError) -> Self {
        MethodResult::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// A handler bound to one channel name.
///
/// Handlers are shared between callers, so implementations hold no mutable
/// state across calls (each request is resolved within `on_method_call`).
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult;
}
