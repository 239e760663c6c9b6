use std::sync::Arc;

use crate::config::Config;
use crate::generation::Generator;
use crate::llm::LlmProviders;
use crate::prompts::PromptStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: PromptStore,
    pub generator: Generator,
}

impl AppState {
    pub fn new(config: Config, providers: LlmProviders) -> Self {
        let store = PromptStore::new(config.prompts.path.clone());
        let generator = Generator::new(providers, config.prompts.normalize_output);

        Self {
            config: Arc::new(config),
            store,
            generator,
        }
    }
}
