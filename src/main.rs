use anyhow::Context;
use tracing_subscriber::EnvFilter;

use promptdesk::api::{create_router, AppState};
use promptdesk::llm::LlmProviders;
use promptdesk::config::optional_env_file;
use promptdesk::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the subscriber so RUST_LOG may come from .env
    let env_file = optional_env_file(dotenvy::dotenv());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("promptdesk=info,tower_http=info")),
        )
        .init();

    match env_file {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let config = Config::from_env();
    tracing::info!(
        "Prompt desk v{} starting, prompts file: {}",
        env!("CARGO_PKG_VERSION"),
        config.prompts.path.display()
    );

    if config.auth.uses_default_password() {
        tracing::warn!("TOOL_PASSWORD is not set, using the built-in default password");
    }

    let providers =
        LlmProviders::from_config(&config).context("Failed to build LLM backend clients")?;
    if providers.is_empty() {
        tracing::warn!("Neither OPENAI_API_KEY nor GOOGLE_API_KEY is set, generation is disabled");
    }
    tracing::info!(?providers, "LLM backends configured");

    let addr = config.bind_addr();
    let app = create_router(AppState::new(config, providers));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
