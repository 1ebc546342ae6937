//! Client Configuration
//!
//! Defaults come from compile-time environment variables; the host page may
//! override them with a `<script id="todo-config" type="application/json">`
//! block.

use serde::{Deserialize, Serialize};

/// Id of the optional JSON config block in the host page
pub const PAGE_CONFIG_ELEMENT_ID: &str = "todo-config";

const DEFAULT_TIMEOUT_MS: u32 = 10_000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every request path. Empty means same origin.
    pub api_base: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Page-level overrides; absent fields keep the current value.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    api_base: Option<String>,
    request_timeout_ms: Option<u32>,
    log_level: Option<String>,
}

impl ClientConfig {
    /// Build from `TODO_API_BASE`, `TODO_REQUEST_TIMEOUT_MS` and `TODO_LOG_LEVEL`
    /// as seen at compile time. Returns warnings for values that were ignored.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_values(
            option_env!("TODO_API_BASE"),
            option_env!("TODO_REQUEST_TIMEOUT_MS"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(base) = api_base {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = timeout_ms {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.request_timeout_ms = ms,
                _ => warnings.push(format!("ignoring invalid request timeout {:?}", raw)),
            }
        }
        if let Some(level) = log_level {
            config.set_log_level(level, &mut warnings);
        }
        (config, warnings)
    }

    /// Apply overrides from the host page's JSON config block.
    pub fn merge_page_json(&mut self, json: &str) -> Vec<String> {
        let mut warnings = Vec::new();
        let overrides: ConfigOverrides = match serde_json::from_str(json) {
            Ok(o) => o,
            Err(e) => {
                warnings.push(format!("ignoring page config: {}", e));
                return warnings;
            }
        };

        if let Some(base) = overrides.api_base {
            self.api_base = base.trim().trim_end_matches('/').to_string();
        }
        match overrides.request_timeout_ms {
            Some(0) => warnings.push("ignoring zero request timeout".to_string()),
            Some(ms) => self.request_timeout_ms = ms,
            None => {}
        }
        if let Some(level) = overrides.log_level {
            self.set_log_level(&level, &mut warnings);
        }
        warnings
    }

    fn set_log_level(&mut self, level: &str, warnings: &mut Vec<String>) {
        match level.trim().parse::<log::Level>() {
            Ok(_) => self.log_level = level.trim().to_lowercase(),
            Err(_) => warnings.push(format!("ignoring unknown log level {:?}", level)),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Environment defaults plus the page's config block, if the page has one.
pub fn load() -> (ClientConfig, Vec<String>) {
    let (mut config, mut warnings) = ClientConfig::from_env();

    let page_json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    if let Some(json) = page_json {
        warnings.extend(config.merge_page_json(&json));
    }
    (config, warnings)
}
