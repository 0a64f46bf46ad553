use std::time::Duration;

use chefgenie_core::domain::common::{
    ChefGenieConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL,
    GenerationConfig, LLMConfig,
};
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "chefgenie-api", version, about = "ChefGenie generation relay")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub generation: GenerationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Serve Prometheus metrics under `{root_path}/metrics`.
    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "text-model", env = "GEMINI_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    #[arg(long = "image-model", env = "GEMINI_IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,

    /// Timeout of a single provider request, in seconds.
    #[arg(long = "llm-timeout", env = "GEMINI_TIMEOUT_SECS", default_value_t = 120)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerationArgs {
    #[arg(long = "recipe-count", env = "RECIPE_COUNT", default_value_t = 3)]
    pub recipe_count: usize,

    #[arg(long = "recipe-language", env = "RECIPE_LANGUAGE", default_value = "English")]
    pub language: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ChefGenieConfig {
    fn from(args: Args) -> Self {
        ChefGenieConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_base_url: args.llm.gemini_base_url,
                text_model: args.llm.text_model,
                image_model: args.llm.image_model,
                request_timeout: Duration::from_secs(args.llm.request_timeout_secs),
            },
            generation: GenerationConfig {
                recipe_count: args.generation.recipe_count,
                language: args.generation.language,
                ..GenerationConfig::default()
            },
        }
    }
}
