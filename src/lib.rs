pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod llm;
pub mod prompts;

pub use config::Config;
pub use error::{DeskError, Result};
