use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category that always resolves to its `standard` mode and additionally
/// runs the secondary backend.
pub const ONELINER_CATEGORY: &str = "wdr2_oneliner";
pub const ONELINER_MODE: &str = "standard";

/// The operator-edited prompt document.
///
/// Expected shape is `{category: {mode: prompt}}`, but the document is kept
/// as raw JSON so a save writes back exactly what the operator submitted.
/// Lookups only succeed on string leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptDocument(Value);

impl PromptDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn lookup(&self, category: &str, mode: &str) -> Option<&str> {
        self.0.get(category)?.get(mode)?.as_str()
    }

    /// Resolves the system prompt for a request, applying the one-liner
    /// override that ignores the caller's mode.
    pub fn resolve(&self, category: &str, mode: &str) -> Option<&str> {
        if category == ONELINER_CATEGORY {
            self.lookup(ONELINER_CATEGORY, ONELINER_MODE)
        } else {
            self.lookup(category, mode)
        }
    }

    /// Category names paired with their mode names, for rendering selectors.
    pub fn categories(&self) -> Vec<(&str, Vec<&str>)> {
        let Some(categories) = self.0.as_object() else {
            return Vec::new();
        };

        categories
            .iter()
            .map(|(category, modes)| {
                let modes: Vec<&str> = modes
                    .as_object()
                    .map(|m| m.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                (category.as_str(), modes)
            })
            .collect()
    }
}
