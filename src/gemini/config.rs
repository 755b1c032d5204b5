use std::env;

/// Gemini ingredient extraction configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; extraction is disabled without one
    pub api_key: Option<String>,

    /// Model name used in the generateContent path
    pub model: String,

    /// API base URL, without a trailing slash
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create a new GeminiConfig from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("GEMINI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Check if upstream extraction is enabled
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full generateContent endpoint, without the key parameter
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-1.5-pro-002".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1".to_string(),
            timeout_secs: 30,
        }
    }
}
