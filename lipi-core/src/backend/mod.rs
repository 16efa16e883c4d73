//! Script-transliteration backends.
//!
//! The `ScriptTransliterator` / `TransliteratorProvider` pair decouples the
//! bridge from any specific native facility (ICU, Foundation
//! `CFStringTransform`, stub); the bridge depends only on these traits.
//!
//! `&mut self` on `transform` intentionally expresses that native
//! transliterator handles are not assumed thread-safe. Instances are created
//! per request and dropped with it — they never cross threads, so the trait
//! carries no `Send` bound.

pub mod stub;

#[cfg(feature = "icu")]
pub mod icu;

#[cfg(target_vendor = "apple")]
pub mod foundation;

#[cfg(feature = "icu")]
pub use icu::IcuProvider;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// Fixed source-script prefix: input is always Latin text.
const LATIN_PREFIX: &str = "Latin-";

/// ICU-style compound transform identifier, e.g. `"Latin-Devanagari"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformId(String);

impl TransformId {
    /// Identifier for a Latin → `script` transform.
    pub fn latin_to(script: &str) -> Self {
        Self(format!("{LATIN_PREFIX}{script}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Target-script half of the identifier.
    pub fn script(&self) -> &str {
        &self.0[LATIN_PREFIX.len()..]
    }
}

impl fmt::Display for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ready-to-use transform for one identifier.
pub trait ScriptTransliterator {
    /// Convert one Latin-script string.
    ///
    /// # Errors
    /// Returns an error when the native facility refuses this input. The
    /// bridge treats that as per-item: the original text is kept and the
    /// rest of the batch continues.
    fn transform(&mut self, text: &str) -> Result<String>;
}

/// Factory for transliterators — one implementation per native facility.
pub trait TransliteratorProvider: Send + Sync + 'static {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Construct a transliterator for `id`.
    ///
    /// # Errors
    /// Returns an error when the identifier is unusable as a whole; the
    /// bridge fails the entire batch with the native message attached.
    fn create(&self, id: &TransformId) -> Result<Box<dyn ScriptTransliterator>>;
}

/// Thread-safe reference-counted handle to any `TransliteratorProvider`.
#[derive(Clone)]
pub struct ProviderHandle(pub Arc<dyn TransliteratorProvider>);

impl ProviderHandle {
    /// Wrap any `TransliteratorProvider` in a `ProviderHandle`.
    pub fn new<P: TransliteratorProvider>(provider: P) -> Self {
        Self(Arc::new(provider))
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("name", &self.0.name())
            .finish()
    }
}

/// Best native provider compiled into this build, if any.
///
/// The explicit `icu` feature wins over the Apple facility; `None` means the
/// build carries no native backend and the bridge answers `API_TOO_LOW`.
pub fn platform_provider() -> Option<ProviderHandle> {
    #[cfg(feature = "icu")]
    {
        Some(ProviderHandle::new(icu::IcuProvider::new()))
    }
    #[cfg(all(not(feature = "icu"), target_vendor = "apple"))]
    {
        Some(ProviderHandle::new(foundation::FoundationProvider::new()))
    }
    #[cfg(all(not(feature = "icu"), not(target_vendor = "apple")))]
    {
        None
    }
}
