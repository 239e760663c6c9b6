mod gemini;
pub mod normalize;
mod openai;
mod provider;

pub use gemini::{GeminiClient, GEMINI_MODEL};
pub use normalize::clean_text;
pub use openai::{OpenAiClient, OPENAI_MODEL, OPENAI_TEMPERATURE};
pub use provider::{ChatBackend, ChatMessage, LlmProviders, Role};
