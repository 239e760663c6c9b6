use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::llm::{GeminiClient, OpenAiClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A language-model provider reduced to "send messages, receive text".
#[async_trait]
pub trait ChatBackend: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// The backends configured at startup. Either slot may be empty when no API
/// key was provided.
#[derive(Clone, Default)]
pub struct LlmProviders {
    pub primary: Option<Arc<dyn ChatBackend>>,
    pub secondary: Option<Arc<dyn ChatBackend>>,
}

impl LlmProviders {
    pub fn new(
        primary: Option<Arc<dyn ChatBackend>>,
        secondary: Option<Arc<dyn ChatBackend>>,
    ) -> Self {
        Self { primary, secondary }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let primary = match &config.openai {
            Some(cfg) => Some(Arc::new(OpenAiClient::new(cfg)?) as Arc<dyn ChatBackend>),
            None => None,
        };
        let secondary = match &config.gemini {
            Some(cfg) => Some(Arc::new(GeminiClient::new(cfg)?) as Arc<dyn ChatBackend>),
            None => None,
        };

        Ok(Self { primary, secondary })
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

impl std::fmt::Debug for LlmProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmProviders")
            .field("primary", &self.primary.as_ref().map(|b| b.model_name()))
            .field("secondary", &self.secondary.as_ref().map(|b| b.model_name()))
            .finish()
    }
}
