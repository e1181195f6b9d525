use dj_core::{BriefingConfig, CountMode, FeedbackConfig, GeneratorConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `feedback-dj.toml`. Every section and field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DjConfig {
    pub server: ServerConfig,
    pub feedback: FeedbackTomlConfig,
    pub briefing: BriefingTomlConfig,
    pub generator: GeneratorTomlConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub http_addr: String,
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing survives a restart.
    pub ephemeral: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8787".into(),
            data_dir: PathBuf::from("./data"),
            ephemeral: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedbackTomlConfig {
    pub max_entries: usize,
    pub count_mode: CountMode,
}

impl Default for FeedbackTomlConfig {
    fn default() -> Self {
        let d = FeedbackConfig::default();
        Self {
            max_entries: d.max_entries,
            count_mode: d.count_mode,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BriefingTomlConfig {
    pub ttl_seconds: u64,
    pub max_prompt_entries: usize,
}

impl Default for BriefingTomlConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 600,
            max_prompt_entries: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorTomlConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub base_url: Option<String>,
    /// Falls back to `CLOUDFLARE_ACCOUNT_ID`.
    pub account_id: Option<String>,
    /// Falls back to `CLOUDFLARE_API_TOKEN`.
    pub api_token: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for GeneratorTomlConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::WorkersAi,
            model: dj_core::llm::DEFAULT_MODEL.into(),
            base_url: None,
            account_id: None,
            api_token: None,
            timeout_seconds: 30,
        }
    }
}

pub const ACCOUNT_ID_ENV: &str = "CLOUDFLARE_ACCOUNT_ID";
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";

/// Where a Workers AI credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    File,
    Env(&'static str),
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::File => write!(f, "config file"),
            CredentialSource::Env(var) => write!(f, "${}", var),
            CredentialSource::Missing => write!(f, "missing"),
        }
    }
}

/// File value wins over the environment; empty strings count as unset.
fn resolve_credential(
    file_value: Option<&str>,
    env_var: &'static str,
    env_value: Option<String>,
) -> (Option<String>, CredentialSource) {
    if let Some(v) = file_value.filter(|v| !v.is_empty()) {
        return (Some(v.to_string()), CredentialSource::File);
    }
    match env_value.filter(|v| !v.is_empty()) {
        Some(v) => (Some(v), CredentialSource::Env(env_var)),
        None => (None, CredentialSource::Missing),
    }
}

impl GeneratorTomlConfig {
    pub fn account_id_source(&self) -> (Option<String>, CredentialSource) {
        resolve_credential(
            self.account_id.as_deref(),
            ACCOUNT_ID_ENV,
            std::env::var(ACCOUNT_ID_ENV).ok(),
        )
    }

    pub fn api_token_source(&self) -> (Option<String>, CredentialSource) {
        resolve_credential(
            self.api_token.as_deref(),
            API_TOKEN_ENV,
            std::env::var(API_TOKEN_ENV).ok(),
        )
    }

    pub fn resolved_account_id(&self) -> Option<String> {
        self.account_id_source().0
    }

    pub fn resolved_token(&self) -> Option<String> {
        self.api_token_source().0
    }
}

impl DjConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Defaults when the file does not exist. A file that exists but cannot
    /// be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path).map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }

    /// Human-readable problems; empty means usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.server.http_addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "server.http_addr '{}' is not a socket address",
                self.server.http_addr
            ));
        }
        if self.feedback.max_entries == 0 {
            errors.push("feedback.max_entries must be at least 1".into());
        }
        if self.briefing.ttl_seconds == 0 {
            errors.push("briefing.ttl_seconds must be at least 1".into());
        }
        if self.briefing.max_prompt_entries == 0 {
            errors.push("briefing.max_prompt_entries must be at least 1".into());
        }
        if self.generator.model.trim().is_empty() && self.generator.provider != ProviderKind::Disabled {
            errors.push("generator.model must not be empty".into());
        }
        if self.generator.provider == ProviderKind::WorkersAi {
            if self.generator.resolved_account_id().is_none() {
                errors.push(
                    "generator.account_id is required for workers_ai (or set CLOUDFLARE_ACCOUNT_ID)"
                        .into(),
                );
            }
            if self.generator.resolved_token().is_none() {
                errors.push(
                    "generator.api_token is required for workers_ai (or set CLOUDFLARE_API_TOKEN)"
                        .into(),
                );
            }
        }

        errors
    }

    pub fn http_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .http_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid http_addr '{}': {}", self.server.http_addr, e))
    }

    pub fn db_path(&self) -> PathBuf {
        self.server.data_dir.join("feedback-dj.redb")
    }

    pub fn feedback_config(&self) -> FeedbackConfig {
        FeedbackConfig {
            max_entries: self.feedback.max_entries,
            count_mode: self.feedback.count_mode,
        }
    }

    pub fn briefing_config(&self) -> BriefingConfig {
        BriefingConfig {
            cache_ttl: Duration::from_secs(self.briefing.ttl_seconds),
            max_prompt_entries: self.briefing.max_prompt_entries,
        }
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            provider: self.generator.provider,
            model: self.generator.model.clone(),
            base_url: self.generator.base_url.clone(),
            account_id: self.generator.resolved_account_id(),
            api_token: self.generator.resolved_token(),
            timeout: Duration::from_secs(self.generator.timeout_seconds),
        }
    }
}
