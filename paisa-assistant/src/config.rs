use serde::{Deserialize, Serialize};

/// Connection settings for the completion provider.
///
/// Injected explicitly wherever a provider is constructed; there is no
/// module-level configuration. The API key itself is never stored here,
/// only the name of the environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of the OpenAI-compatible API, without the completions path.
    pub base_url: String,

    /// Model identifier requested from the provider.
    pub model: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Upper bound on generated tokens.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            max_tokens: 500,
            temperature: 0.6,
        }
    }
}
