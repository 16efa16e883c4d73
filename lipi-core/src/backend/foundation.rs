//! Apple string-transform backend (`CFStringTransform`).
//!
//! Unlike ICU, Foundation gives no construction-time validation: an unknown
//! transform identifier surfaces as a per-string failure, which the bridge
//! maps to its keep-original fallback. Both facilities therefore look
//! identical from the caller's side.

// Single FFI boundary in the crate: CFStringTransform mutates a
// CFMutableString in place and has no safe wrapper.
#![allow(unsafe_code)]

use std::ptr;

use core_foundation::base::TCFType;
use core_foundation::string::CFString;
use core_foundation_sys::base::kCFAllocatorDefault;
use core_foundation_sys::string::{CFStringCreateMutableCopy, CFStringRef, CFStringTransform};
use tracing::debug;

use crate::backend::{ScriptTransliterator, TransformId, TransliteratorProvider};
use crate::error::{Result, TranslitError};

pub struct FoundationTransliterator {
    id: TransformId,
    transform: CFString,
}

impl ScriptTransliterator for FoundationTransliterator {
    fn transform(&mut self, text: &str) -> Result<String> {
        let source = CFString::new(text);
        unsafe {
            let buffer = CFStringCreateMutableCopy(
                kCFAllocatorDefault,
                0,
                source.as_concrete_TypeRef(),
            );
            if buffer.is_null() {
                return Err(TranslitError::Transform(
                    "CFStringCreateMutableCopy returned null".into(),
                ));
            }
            let applied = CFStringTransform(
                buffer,
                ptr::null_mut(),
                self.transform.as_concrete_TypeRef(),
                0,
            );
            // Take ownership regardless of the outcome so the buffer is
            // released even on the error path.
            let owned = CFString::wrap_under_create_rule(buffer as CFStringRef);
            if applied == 0 {
                return Err(TranslitError::Transform(format!(
                    "CFStringTransform refused `{}` for transform {}",
                    text, self.id
                )));
            }
            Ok(owned.to_string())
        }
    }
}

/// Provider backed by Foundation's string-transform facility.
#[derive(Debug, Default)]
pub struct FoundationProvider;

impl FoundationProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TransliteratorProvider for FoundationProvider {
    fn name(&self) -> &'static str {
        "foundation"
    }

    fn create(&self, id: &TransformId) -> Result<Box<dyn ScriptTransliterator>> {
        debug!(id = %id, "constructing Foundation transliterator");
        Ok(Box::new(FoundationTransliterator {
            transform: CFString::new(id.as_str()),
            id: id.clone(),
        }))
    }
}
