use serde::Deserialize;

use crate::llm::{clean_text, ChatMessage, LlmProviders};
use crate::prompts::{PromptDocument, ONELINER_CATEGORY};

pub const PROMPT_NOT_FOUND: &str = "Fehler: Prompt-Kategorie nicht gefunden.";
pub const NO_BACKENDS_MESSAGE: &str = "Keine KI-Modelle konfiguriert.";

const PRIMARY_HEADER: &str = "🤖 --- GPT-4o VORSCHLÄGE ---\n\n";
const PRIMARY_ERROR: &str = "GPT Fehler: ";
const SECONDARY_HEADER: &str = "\n\n✨ --- GEMINI VORSCHLÄGE ---\n\n";
const SECONDARY_EMPTY: &str = "\n\nGemini hat keinen Text zurückgegeben.";
const SECONDARY_ERROR: &str = "\n\nGemini Fehler: ";

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub category: String,
    pub mode: String,
    pub content: String,
    #[serde(default)]
    pub extra: Option<String>,
}

/// `"Inhalt:\n<content>"`, plus the additional instruction when `extra`
/// has any non-whitespace text.
pub fn build_user_message(content: &str, extra: Option<&str>) -> String {
    let mut user_msg = format!("Inhalt:\n{}", content);
    if let Some(extra) = extra.filter(|e| !e.trim().is_empty()) {
        user_msg.push_str("\n\nZusatzanweisung: ");
        user_msg.push_str(extra);
    }
    user_msg
}

/// Turns a request plus the current prompt document into the text shown to
/// the operator. Backend failures become part of the text; nothing here
/// returns an error.
#[derive(Debug, Clone)]
pub struct Generator {
    providers: LlmProviders,
    normalize: bool,
}

impl Generator {
    pub fn new(providers: LlmProviders, normalize: bool) -> Self {
        Self {
            providers,
            normalize,
        }
    }

    pub fn providers(&self) -> &LlmProviders {
        &self.providers
    }

    fn finish(&self, text: &str) -> String {
        if self.normalize {
            clean_text(text)
        } else {
            text.to_string()
        }
    }

    pub async fn generate(&self, prompts: &PromptDocument, request: &GenerationRequest) -> String {
        let Some(system_msg) = prompts.resolve(&request.category, &request.mode) else {
            tracing::info!(
                category = %request.category,
                mode = %request.mode,
                "No prompt configured for category/mode"
            );
            return PROMPT_NOT_FOUND.to_string();
        };

        let user_msg = build_user_message(&request.content, request.extra.as_deref());
        let is_oneliner = request.category == ONELINER_CATEGORY;

        let mut results = Vec::new();

        if let Some(primary) = &self.providers.primary {
            let messages = [
                ChatMessage::system(system_msg),
                ChatMessage::user(user_msg.as_str()),
            ];
            match primary.complete(&messages).await {
                Ok(text) => results.push(format!("{}{}", PRIMARY_HEADER, self.finish(&text))),
                Err(e) => {
                    tracing::warn!(model = primary.model_name(), error = %e, "Primary backend failed");
                    results.push(format!("{}{}", PRIMARY_ERROR, e));
                }
            }
        }

        if let Some(secondary) = self.providers.secondary.as_ref().filter(|_| is_oneliner) {
            // No role separation here: instruction and request travel as one prompt
            let full_prompt = format!(
                "SYSTEM ANWEISUNG:\n{}\n\nUSER ANFRAGE:\n{}",
                system_msg, user_msg
            );
            match secondary.complete(&[ChatMessage::user(full_prompt)]).await {
                Ok(text) if !text.is_empty() => {
                    results.push(format!("{}{}", SECONDARY_HEADER, self.finish(&text)))
                }
                Ok(_) => results.push(SECONDARY_EMPTY.to_string()),
                Err(e) => {
                    tracing::warn!(model = secondary.model_name(), error = %e, "Secondary backend failed");
                    results.push(format!("{}{}", SECONDARY_ERROR, e));
                }
            }
        }

        if results.is_empty() {
            return NO_BACKENDS_MESSAGE.to_string();
        }

        results.concat()
    }
}
