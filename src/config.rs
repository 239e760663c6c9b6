use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "passwort";

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Treats a missing `.env` file as absent; any other failure (unreadable
/// file, malformed line) is passed on to the caller.
pub fn optional_env_file<T>(
    result: std::result::Result<T, dotenvy::Error>,
) -> std::result::Result<Option<T>, dotenvy::Error> {
    match result {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub prompts: PromptsConfig,
    pub openai: Option<BackendConfig>,
    pub gemini: Option<BackendConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Basic-auth credentials. The fallback password is the only secret the
/// tool ships with and must be overridden in any real deployment.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_PASSWORD
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptsConfig {
    pub path: PathBuf,
    /// Strip markdown markers from model output before returning it
    pub normalize_output: bool,
}

/// Connection settings for one LLM backend. Present only when an API key
/// was configured.
#[derive(Clone, Deserialize)]
pub struct BackendConfig {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("DESK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DESK_PORT", 8000),
            },
            auth: AuthConfig {
                username: env::var("TOOL_USERNAME")
                    .unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
                password: env::var("TOOL_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
            },
            prompts: PromptsConfig {
                path: env::var("PROMPTS_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("prompts.json")),
                normalize_output: parse_env_or("NORMALIZE_OUTPUT", true),
            },
            openai: env_non_empty("OPENAI_API_KEY").map(|api_key| BackendConfig {
                api_key,
                base_url: env_non_empty("OPENAI_BASE_URL")
                    .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            }),
            gemini: env_non_empty("GOOGLE_API_KEY").map(|api_key| BackendConfig {
                api_key,
                base_url: env_non_empty("GEMINI_BASE_URL")
                    .unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
            }),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize tests touching them
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DESK_HOST",
        "DESK_PORT",
        "TOOL_USERNAME",
        "TOOL_PASSWORD",
        "PROMPTS_FILE",
        "NORMALIZE_OUTPUT",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "GOOGLE_API_KEY",
        "GEMINI_BASE_URL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.password, "passwort");
        assert!(config.auth.uses_default_password());
        assert_eq!(config.prompts.path, PathBuf::from("prompts.json"));
        assert!(config.prompts.normalize_output);
        assert!(config.openai.is_none());
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("DESK_PORT", "9090");
        std::env::set_var("TOOL_USERNAME", "redaktion");
        std::env::set_var("TOOL_PASSWORD", "geheim");
        std::env::set_var("PROMPTS_FILE", "/srv/desk/prompts.json");
        std::env::set_var("NORMALIZE_OUTPUT", "false");
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("GOOGLE_API_KEY", "g-test");
        std::env::set_var("GEMINI_BASE_URL", "http://localhost:9999");

        let config = Config::from_env();
        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.auth.username, "redaktion");
        assert!(!config.auth.uses_default_password());
        assert_eq!(config.prompts.path, PathBuf::from("/srv/desk/prompts.json"));
        assert!(!config.prompts.normalize_output);

        let openai = config.openai.unwrap();
        assert_eq!(openai.api_key, "sk-test");
        assert_eq!(openai.base_url, OPENAI_BASE_URL);

        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "g-test");
        assert_eq!(gemini.base_url, "http://localhost:9999");

        clear_env();
    }

    #[test]
    fn test_empty_api_key_counts_as_unset() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("OPENAI_API_KEY", "");
        std::env::set_var("GOOGLE_API_KEY", "   ");

        let config = Config::default();
        assert!(config.openai.is_none());
        assert!(config.gemini.is_none());

        clear_env();
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let auth = AuthConfig {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        let backend = BackendConfig {
            api_key: "sk-secret".to_string(),
            base_url: OPENAI_BASE_URL.to_string(),
        };

        let rendered = format!("{:?} {:?}", auth, backend);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_env_or_invalid_value_uses_default() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::set_var("__TEST_DESK_PORT", "abc");
        let result: u16 = parse_env_or("__TEST_DESK_PORT", 8000);
        assert_eq!(result, 8000);

        std::env::remove_var("__TEST_DESK_PORT");
    }

    #[test]
    fn test_parse_env_or_valid_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::set_var("__TEST_DESK_PORT", "8080");
        let result: u16 = parse_env_or("__TEST_DESK_PORT", 8000);
        assert_eq!(result, 8080);

        std::env::remove_var("__TEST_DESK_PORT");
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let result = optional_env_file(dotenvy::from_path(dir.path().join(".env")));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_malformed_env_file_is_reported() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "this is not an assignment\n").unwrap();

        let err = optional_env_file(dotenvy::from_path(&path)).unwrap_err();
        assert!(!err.not_found());
    }

    #[test]
    fn test_env_file_is_loaded() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "__TEST_DESK_DOTENV=geladen\n").unwrap();

        let result = optional_env_file(dotenvy::from_path(&path));
        assert!(matches!(result, Ok(Some(()))));
        assert_eq!(std::env::var("__TEST_DESK_DOTENV").unwrap(), "geladen");

        std::env::remove_var("__TEST_DESK_DOTENV");
    }
}
