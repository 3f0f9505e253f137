mod file_config;

pub use file_config::{FileConfig, GeniusConfig, LlmConfig};

use crate::llm::CompletionOptions;
use crate::lyrics::GENIUS_API_BASE;
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const GENIUS_API_KEY_VAR: &str = "GENIUS_API_KEY";
pub const LLM_API_KEY_VAR: &str = "GROQ_API_KEY";

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_LLM_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_LOG_FILE: &str = "soulsync_logs.txt";
pub const DEFAULT_MAX_LYRICS_CHARS: usize = 1000;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub llm_model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
    pub genius: GeniusSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone)]
pub struct GeniusSettings {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider_name: Option<String>,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub max_lyrics_chars: usize,
    pub request_timeout: Option<Duration>,
}

impl LlmSettings {
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
            timeout: self.request_timeout,
            ..Default::default()
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present. API keys missing from
    /// the file are looked up through `env`.
    pub fn resolve(
        cli: &CliConfig,
        file_config: Option<FileConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let output_dir = file
            .output_dir
            .map(PathBuf::from)
            .or_else(|| cli.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        if !output_dir.is_dir() {
            bail!("Output directory does not exist: {:?}", output_dir);
        }

        let log_file = file
            .log_file
            .map(PathBuf::from)
            .or_else(|| cli.log_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let genius_file = file.genius.unwrap_or_default();
        let genius = GeniusSettings {
            api_key: require_key(genius_file.api_key, GENIUS_API_KEY_VAR, &env)?,
            base_url: genius_file
                .base_url
                .unwrap_or_else(|| GENIUS_API_BASE.to_string()),
            request_timeout: genius_file.request_timeout_sec.map(Duration::from_secs),
        };

        let llm_file = file.llm.unwrap_or_default();
        let temperature = llm_file.temperature.unwrap_or(0.1);
        if !(0.0..=2.0).contains(&temperature) {
            bail!("llm.temperature must be within [0, 2], got {}", temperature);
        }
        let max_lyrics_chars = llm_file
            .max_lyrics_chars
            .unwrap_or(DEFAULT_MAX_LYRICS_CHARS);
        if max_lyrics_chars == 0 {
            bail!("llm.max_lyrics_chars must be greater than 0");
        }
        let llm = LlmSettings {
            provider_name: llm_file.provider_name,
            api_key: require_key(llm_file.api_key, LLM_API_KEY_VAR, &env)?,
            base_url: llm_file
                .base_url
                .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            model: llm_file
                .model
                .or_else(|| cli.llm_model.clone())
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            temperature,
            max_tokens: llm_file.max_tokens.unwrap_or(50),
            max_lyrics_chars,
            request_timeout: llm_file.request_timeout_sec.map(Duration::from_secs),
        };

        Ok(Self {
            output_dir,
            log_file,
            genius,
            llm,
        })
    }
}

fn require_key(
    from_file: Option<String>,
    var: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<String> {
    from_file
        .or_else(|| env(var))
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{} bulunamadı! .env dosyanızı kontrol edin.", var))
}
