//! Native ICU backend (`utrans`), enabled by the `icu` cargo feature.
//!
//! ICU validates transform identifiers at construction time: an unknown or
//! malformed `script` fails `create`, which the bridge reports as a
//! batch-level `TRANSLIT_ERROR` with the native message attached.

use rust_icu_sys as sys;
use rust_icu_utrans as utrans;
use tracing::debug;

use crate::backend::{ScriptTransliterator, TransformId, TransliteratorProvider};
use crate::error::{Result, TranslitError};

pub struct IcuTransliterator {
    inner: utrans::UTransliterator,
}

impl ScriptTransliterator for IcuTransliterator {
    fn transform(&mut self, text: &str) -> Result<String> {
        self.inner
            .transliterate(text)
            .map_err(|e| TranslitError::Transform(e.to_string()))
    }
}

/// Provider backed by the system ICU library.
#[derive(Debug, Default)]
pub struct IcuProvider;

impl IcuProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TransliteratorProvider for IcuProvider {
    fn name(&self) -> &'static str {
        "icu"
    }

    fn create(&self, id: &TransformId) -> Result<Box<dyn ScriptTransliterator>> {
        debug!(id = %id, "constructing ICU transliterator");
        let inner = utrans::UTransliterator::new(
            id.as_str(),
            None,
            sys::UTransDirection::UTRANS_FORWARD,
        )
        .map_err(|e| TranslitError::Transform(e.to_string()))?;
        Ok(Box::new(IcuTransliterator { inner }))
    }
}
