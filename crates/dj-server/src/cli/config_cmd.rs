use crate::config::{CredentialSource, DjConfig};
use dj_core::ProviderKind;
use anyhow::Result;
use std::path::Path;

/// `config validate`: check the file on disk, without CLI overrides.
pub fn validate(config_path: &Path) -> Result<()> {
    let config = if config_path.exists() {
        DjConfig::load(config_path)
            .map_err(|e| anyhow::anyhow!("❌ Failed to parse {}: {}", config_path.display(), e))?
    } else {
        println!("No file at {}; checking the defaults.", config_path.display());
        DjConfig::default()
    };

    for line in summary(&config) {
        println!("  {}", line);
    }

    let errors = config.validate();
    if !errors.is_empty() {
        anyhow::bail!(
            "❌ {} problem(s) in {}:\n  - {}",
            errors.len(),
            config_path.display(),
            errors.join("\n  - ")
        );
    }
    println!("✅ {} is valid.", config_path.display());
    Ok(())
}

/// What `serve` would run with: storage, generator and where its credentials come from.
fn summary(config: &DjConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if config.server.ephemeral {
        lines.push("storage:    in-memory (ephemeral)".to_string());
    } else {
        lines.push(format!("storage:    {}", config.db_path().display()));
    }

    let generator = &config.generator;
    match generator.provider {
        ProviderKind::Disabled => {
            lines.push("generator:  disabled (every briefing is the fallback)".to_string());
        }
        ProviderKind::Ollama => {
            lines.push(format!("generator:  ollama, model {}", generator.model));
        }
        ProviderKind::WorkersAi => {
            lines.push(format!("generator:  workers_ai, model {}", generator.model));
            let (_, account) = generator.account_id_source();
            let (_, token) = generator.api_token_source();
            lines.push(format!("account_id: {}", account));
            lines.push(format!("api_token:  {}", token));
        }
    }

    lines.push(format!(
        "cache:      {}s, prompt uses newest {} of {} entries",
        config.briefing.ttl_seconds, config.briefing.max_prompt_entries, config.feedback.max_entries
    ));
    lines
}

/// `config show`: the effective configuration after CLI overrides, token masked.
pub fn show(config: &DjConfig) -> Result<()> {
    let mut config = config.clone();
    let (_, token) = config.generator.api_token_source();
    if token != CredentialSource::Missing {
        config.generator.api_token = Some(format!("******** (from {})", token));
    }
    match toml::to_string_pretty(&config) {
        Ok(s) => println!("{}", s),
        Err(e) => anyhow::bail!("Failed to serialize config: {}", e),
    }
    Ok(())
}
