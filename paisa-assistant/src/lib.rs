pub mod config;
pub mod prompt;
pub mod provider;

pub use config::AssistantConfig;
pub use prompt::{FinancialSummary, SYSTEM_PROMPT, build_user_prompt};
pub use provider::{
    CompletionProvider, HttpCompletionProvider, ProviderError, answer_with, generate_answer,
};
