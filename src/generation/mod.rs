mod orchestrator;

pub use orchestrator::{
    build_user_message, GenerationRequest, Generator, NO_BACKENDS_MESSAGE, PROMPT_NOT_FOUND,
};
