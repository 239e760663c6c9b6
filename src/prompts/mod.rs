mod document;
mod store;

pub use document::{PromptDocument, ONELINER_CATEGORY, ONELINER_MODE};
pub use store::PromptStore;
