//! Channel-name → handler routing.
//!
//! The application shell registers each handler once at startup, then routes
//! every inbound call by channel name. Registration is the only process-wide
//! hook the bridge needs; the registry itself is plain owned state, so
//! embedders can hold one per engine instance (or per test).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::channel::{MethodCall, MethodCallHandler, MethodResult};
use crate::error::Result;

/// Routes method calls to the handler registered for their channel.
///
/// `invoke` is safe to call from multiple threads: the handler map is only
/// locked long enough to clone the `Arc`, never across a dispatch.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: Mutex<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `channel`, replacing any previous binding.
    pub fn register(&self, channel: impl Into<String>, handler: Arc<dyn MethodCallHandler>) {
        let channel = channel.into();
        info!(channel = %channel, "method-channel handler registered");
        self.handlers.lock().insert(channel, handler);
    }

    /// Dispatch one call and return its response envelope.
    ///
    /// A channel nobody registered answers `NotImplemented`, the same signal
    /// an unrecognized method name produces — from the caller's side both
    /// mean "nothing here implements what you asked for".
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> MethodResult {
        let handler = self.handlers.lock().get(channel).cloned();
        match handler {
            Some(handler) => {
                debug!(channel, method = %call.method, "dispatching method call");
                handler.on_method_call(call)
            }
            None => {
                debug!(channel, "no handler for channel");
                MethodResult::NotImplemented
            }
        }
    }

    /// Dispatch a raw JSON call envelope and return the raw response envelope.
    ///
    /// # Errors
    /// Fails only when `payload` is not a valid `MethodCall`; everything past
    /// parsing is reported inside the returned envelope.
    pub fn invoke_json(&self, channel: &str, payload: &str) -> Result<String> {
        let call: MethodCall = serde_json::from_str(payload)?;
        let result = self.invoke(channel, &call);
        Ok(serde_json::to_string(&result)?)
    }
}
