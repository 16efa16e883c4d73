//! Bridge configuration.
//!
//! Small enough to construct inline; env overrides exist so a host shell can
//! retarget the channel or the default script without recompiling.

use serde::{Deserialize, Serialize};

/// Channel name the bridge registers under unless overridden.
pub const DEFAULT_CHANNEL: &str = "lipi://translit";

/// Target script substituted when a request names none.
pub const DEFAULT_SCRIPT: &str = "Devanagari";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    /// Method-channel name the bridge is registered under.
    pub channel: String,
    /// Script identifier used when a request omits `script`.
    pub default_script: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.into(),
            default_script: DEFAULT_SCRIPT.into(),
        }
    }
}

impl BridgeConfig {
    /// Default config with `LIPI_CHANNEL` / `LIPI_DEFAULT_SCRIPT` overrides
    /// applied. Blank values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("LIPI_CHANNEL") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.channel = trimmed.to_string();
            }
        }
        if let Ok(raw) = std::env::var("LIPI_DEFAULT_SCRIPT") {
            if let Some(script) = normalize_script(&raw) {
                config.default_script = script.to_string();
            }
        }
        config
    }
}

/// Trim a requested script identifier; blank means "not provided" and the
/// configured default applies.
pub fn normalize_script(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.channel, "lipi://translit");
        assert_eq!(config.default_script, "Devanagari");
    }

    #[test]
    fn config_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(BridgeConfig::default()).expect("serialize config");
        assert_eq!(json["channel"], "lipi://translit");
        assert_eq!(json["defaultScript"], "Devanagari");
    }

    #[test]
    fn normalize_script_trims_and_drops_blanks() {
        assert_eq!(normalize_script("  Tamil "), Some("Tamil"));
        assert_eq!(normalize_script("   "), None);
        assert_eq!(normalize_script(""), None);
    }
}
