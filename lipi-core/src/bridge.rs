//! `TranslitBridge` — the method-channel handler for batch transliteration.
//!
//! ## Contract
//!
//! | Condition | Response |
//! |-----------|----------|
//! | no native backend in this build | error `API_TOO_LOW` |
//! | transliterator construction failed | error `TRANSLIT_ERROR` |
//! | malformed arguments | error `TRANSLIT_ERROR` |
//! | one item fails to convert | that item passes through unchanged |
//! | unrecognized method name | `notImplemented` |
//!
//! The keep-original fallback is deliberately the bridge's job, not a
//! backend's: the native facilities disagree about it (ICU raises,
//! Foundation returns nothing), and callers must see one behavior.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::backend::{self, ProviderHandle, TransformId};
use crate::channel::{MethodCall, MethodCallHandler, MethodResult};
use crate::config::{self, BridgeConfig};
use crate::error::{Result, TranslitError};

/// The single recognized batch operation.
pub const METHOD_TRANSLIT_BATCH: &str = "translitBatch";

/// Arguments of a `translitBatch` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslitRequest {
    /// Items to convert, in order. Absent means an empty batch.
    pub texts: Vec<String>,
    /// Target script identifier; `None` selects the configured default.
    pub script: Option<String>,
}

/// Stateless per-request bridge between the method channel and a
/// transliteration backend.
pub struct TranslitBridge {
    provider: Option<ProviderHandle>,
    config: BridgeConfig,
}

impl TranslitBridge {
    /// Bridge over an explicit provider (`None` models a platform without
    /// the native facility — every batch then answers `API_TOO_LOW`).
    pub fn new(provider: Option<ProviderHandle>, config: BridgeConfig) -> Self {
        Self { provider, config }
    }

    /// Bridge over the best native backend compiled into this build.
    ///
    /// The bridge is constructed even when no backend is available, so the
    /// shell can always register the channel and callers get a well-formed
    /// `API_TOO_LOW` instead of a missing-channel signal.
    pub fn platform_default(config: BridgeConfig) -> Self {
        Self::new(backend::platform_provider(), config)
    }

    /// Channel name this bridge expects to be registered under.
    pub fn channel(&self) -> &str {
        &self.config.channel
    }

    /// Run one batch: capability gate, per-item dispatch, keep-original
    /// fallback.
    ///
    /// # Errors
    /// - `TranslitError::UnsupportedPlatform` when no backend is present.
    /// - `TranslitError::Transform` when the transliterator cannot be
    ///   constructed for the requested script (no partial output).
    pub fn translit_batch(&self, request: &TranslitRequest) -> Result<Vec<String>> {
        let provider = self.provider.as_ref().ok_or_else(Self::unsupported)?;

        let script = request
            .script
            .as_deref()
            .and_then(config::normalize_script)
            .unwrap_or(&self.config.default_script);
        let id = TransformId::latin_to(script);

        let mut transliterator = provider.0.create(&id)?;
        debug!(
            backend = provider.0.name(),
            id = %id,
            items = request.texts.len(),
            "transliterating batch"
        );

        let mut output = Vec::with_capacity(request.texts.len());
        for (index, text) in request.texts.iter().enumerate() {
            match transliterator.transform(text) {
                Ok(converted) => output.push(converted),
                Err(e) => {
                    // One bad item must not sink the batch.
                    warn!(index, error = %e, "item transliteration failed, keeping original");
                    output.push(text.clone());
                }
            }
        }
        Ok(output)
    }

    /// Resolve one call to its result value.
    fn dispatch(&self, call: &MethodCall) -> Result<serde_json::Value> {
        match call.method.as_str() {
            METHOD_TRANSLIT_BATCH => {
                // Capability gate runs before argument parsing: the platform
                // cannot become capable by retrying with different arguments.
                if self.provider.is_none() {
                    return Err(Self::unsupported());
                }
                let request: TranslitRequest = if call.args.is_null() {
                    TranslitRequest::default()
                } else {
                    serde_json::from_value(call.args.clone())?
                };
                Ok(json!(self.translit_batch(&request)?))
            }
            other => Err(TranslitError::UnknownMethod(other.to_string())),
        }
    }

    fn unsupported() -> TranslitError {
        TranslitError::UnsupportedPlatform(
            "no native transliteration backend in this build".into(),
        )
    }
}

impl MethodCallHandler for TranslitBridge {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        match self.dispatch(call) {
            Ok(value) => MethodResult::ok(value),
            Err(TranslitError::UnknownMethod(method)) => {
                debug!(method = %method, "unknown method");
                MethodResult::NotImplemented
            }
            Err(e) => MethodResult::error(&e),
        }
    }
}
