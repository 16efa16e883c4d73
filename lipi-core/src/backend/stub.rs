//! `StubProvider` — placeholder backend with no native dependency.
//!
//! Marks each string with its transform identifier instead of converting it,
//! so the full channel/bridge path can be exercised on hosts without a
//! native facility. The marker also makes the applied transform observable
//! from tests.

use tracing::debug;

use crate::backend::{ScriptTransliterator, TransformId, TransliteratorProvider};
use crate::error::Result;

/// Marker-echo transliterator: `"namaste"` → `"[Latin-Devanagari] namaste"`.
pub struct StubTransliterator {
    id: TransformId,
}

impl ScriptTransliterator for StubTransliterator {
    fn transform(&mut self, text: &str) -> Result<String> {
        Ok(format!("[{}] {}", self.id, text))
    }
}

/// Provider for [`StubTransliterator`]. Accepts every identifier.
#[derive(Debug, Default)]
pub struct StubProvider;

impl StubProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TransliteratorProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn create(&self, id: &TransformId) -> Result<Box<dyn ScriptTransliterator>> {
        debug!(id = %id, "StubProvider::create");
        Ok(Box::new(StubTransliterator { id: id.clone() }))
    }
}
