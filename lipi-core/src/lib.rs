//! # lipi-core
//!
//! Latin → Indic script-transliteration bridge SDK.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► ChannelRegistry::invoke("lipi://translit", MethodCall)
//!                     │
//!               TranslitBridge          capability gate, request validation
//!                     │
//!      TransliteratorProvider::create("Latin-<script>")
//!                     │
//!        ScriptTransliterator::transform   per item, keep-original fallback
//! ```
//!
//! The bridge owns the contract — batch shape, error codes, fallback policy —
//! while the conversion itself is delegated to whichever backend the build
//! carries: ICU behind the `icu` feature, Foundation's string transforms on
//! Apple targets, or the stub everywhere else.

#![deny(unsafe_code)] // `backend::foundation` re-allows for its one FFI call
#![warn(clippy::all)]

pub mod backend;
pub mod bridge;
pub mod channel;
pub mod config;
pub mod error;

// Convenience re-exports for downstream crates
pub use backend::{
    platform_provider, ProviderHandle, ScriptTransliterator, TransformId, TransliteratorProvider,
};
pub use bridge::{TranslitBridge, TranslitRequest, METHOD_TRANSLIT_BATCH};
pub use channel::{ChannelRegistry, MethodCall, MethodCallHandler, MethodResult};
pub use config::BridgeConfig;
pub use error::{Result, TranslitError};

#[cfg(feature = "icu")]
pub use backend::IcuProvider;
