use anyhow::{Context, Result};

const DEFAULT_ANALYSIS_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_ANALYSIS_MODEL: &str = "llama-3.1-8b-instant";
const DEFAULT_SKILLS_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";
const DEFAULT_SKILLS_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for one chat-completion provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

/// Application configuration loaded from environment variables.
///
/// Each feature owns its credential. A feature whose key is unset is disabled
/// at startup instead of failing the whole service.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: Option<ProviderConfig>,
    pub skills: Option<ProviderConfig>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout_secs = parse_env("LLM_TIMEOUT_SECS", 120u64)?;

        Ok(Config {
            analysis: provider_from_env(
                "ANALYSIS",
                DEFAULT_ANALYSIS_API_URL,
                DEFAULT_ANALYSIS_MODEL,
                timeout_secs,
            ),
            skills: provider_from_env(
                "SKILLS",
                DEFAULT_SKILLS_API_URL,
                DEFAULT_SKILLS_MODEL,
                timeout_secs,
            ),
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 20 * 1024 * 1024usize)?,
        })
    }
}

/// Reads `<PREFIX>_API_KEY`, `<PREFIX>_API_URL` and `<PREFIX>_MODEL`.
/// Returns `None` when the key is missing or blank.
fn provider_from_env(
    prefix: &str,
    default_url: &str,
    default_model: &str,
    timeout_secs: u64,
) -> Option<ProviderConfig> {
    let api_key = optional_env(&format!("{prefix}_API_KEY"))?;
    Some(ProviderConfig {
        api_url: optional_env(&format!("{prefix}_API_URL"))
            .unwrap_or_else(|| default_url.to_string()),
        api_key,
        model: optional_env(&format!("{prefix}_MODEL"))
            .unwrap_or_else(|| default_model.to_string()),
        timeout_secs,
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
