use std::sync::Arc;

use lipi_core::backend::stub::StubProvider;
use lipi_core::{
    BridgeConfig, ChannelRegistry, MethodCall, MethodResult, ProviderHandle, ScriptTransliterator,
    TransformId, TranslitBridge, TranslitError, TransliteratorProvider, METHOD_TRANSLIT_BATCH,
};
use serde_json::{json, Value};

/// Uppercases everything except `"bharat"`, standing in for a native
/// facility that chokes on one input.
struct PickyTransliterator;

impl ScriptTransliterator for PickyTransliterator {
    fn transform(&mut self, text: &str) -> lipi_core::Result<String> {
        if text == "bharat" {
            return Err(TranslitError::Transform("refused".into()));
        }
        Ok(text.to_uppercase())
    }
}

struct PickyProvider;

impl TransliteratorProvider for PickyProvider {
    fn name(&self) -> &'static str {
        "picky"
    }

    fn create(&self, _id: &TransformId) -> lipi_core::Result<Box<dyn ScriptTransliterator>> {
        Ok(Box::new(PickyTransliterator))
    }
}

/// Rejects every transform id at construction time, like ICU with an
/// unknown script.
struct FailingProvider;

impl TransliteratorProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn create(&self, id: &TransformId) -> lipi_core::Result<Box<dyn ScriptTransliterator>> {
        Err(TranslitError::Transform(format!("no such transform: {id}")))
    }
}

fn registry_with(provider: Option<ProviderHandle>) -> (ChannelRegistry, String) {
    let registry = ChannelRegistry::new();
    let bridge = TranslitBridge::new(provider, BridgeConfig::default());
    let channel = bridge.channel().to_string();
    registry.register(channel.clone(), Arc::new(bridge));
    (registry, channel)
}

fn invoke(registry: &ChannelRegistry, channel: &str, payload: &str) -> Value {
    let response = registry
        .invoke_json(channel, payload)
        .expect("well-formed envelope");
    serde_json::from_str(&response).expect("well-formed response JSON")
}

#[test]
fn batch_converts_every_item_in_order() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":["namaste","bharat"],"script":"Devanagari"}}"#,
    );

    assert_eq!(response["status"], "ok");
    assert_eq!(
        response["value"],
        json!(["[Latin-Devanagari] namaste", "[Latin-Devanagari] bharat"])
    );
}

#[test]
fn empty_batch_with_explicit_script_yields_empty_output() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":[],"script":"Tamil"}}"#,
    );

    assert_eq!(response["status"], "ok");
    assert_eq!(response["value"], json!([]));
}

#[test]
fn omitted_script_falls_back_to_devanagari() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":["yoga"]}}"#,
    );

    assert_eq!(response["status"], "ok");
    assert_eq!(response["value"], json!(["[Latin-Devanagari] yoga"]));
}

#[test]
fn missing_texts_key_is_an_empty_batch() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"script":"Devanagari"}}"#,
    );

    assert_eq!(response["status"], "ok");
    assert_eq!(response["value"], json!([]));
}

#[test]
fn per_item_refusal_passes_the_original_through() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(PickyProvider)));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":["namaste","bharat","yoga"]}}"#,
    );

    assert_eq!(response["status"], "ok");
    assert_eq!(response["value"], json!(["NAMASTE", "bharat", "YOGA"]));
}

#[test]
fn construction_failure_surfaces_as_translit_error() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(FailingProvider)));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":["namaste"],"script":"Klingon"}}"#,
    );

    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "TRANSLIT_ERROR");
    let message = response["message"].as_str().expect("message is a string");
    assert!(message.contains("Latin-Klingon"));
    assert!(response.get("value").is_none(), "no partial output on failure");
}

#[test]
fn missing_backend_surfaces_as_api_too_low() {
    let (registry, channel) = registry_with(None);

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"translitBatch","args":{"texts":["namaste"]}}"#,
    );

    assert_eq!(response["status"], "error");
    assert_eq!(response["code"], "API_TOO_LOW");
}

#[test]
fn unknown_method_answers_not_implemented() {
    let (registry, channel) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let response = invoke(
        &registry,
        &channel,
        r#"{"method":"transliterateOne","args":{"texts":["namaste"]}}"#,
    );

    assert_eq!(response, json!({ "status": "notImplemented" }));
}

#[test]
fn unknown_channel_answers_not_implemented() {
    let (registry, _) = registry_with(Some(ProviderHandle::new(StubProvider::new())));

    let call = MethodCall::new(METHOD_TRANSLIT_BATCH, json!({ "texts": [] }));
    assert_eq!(
        registry.invoke("lipi://somewhere-else", &call),
        MethodResult::NotImplemented
    );
}
