use crate::cli::{BriefingArgs, OutputFormat};
use anyhow::Result;

pub async fn run(args: BriefingArgs, server: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/briefing", server.trim_end_matches('/'));

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP request failed: {}. Is `feedback-dj serve` running?", e))?;

    if !resp.status().is_success() {
        anyhow::bail!("Server returned {}", resp.status());
    }

    let cached = resp
        .headers()
        .get("x-briefing-cached")
        .and_then(|v| v.to_str().ok())
        == Some("true");
    let text = resp.text().await?;

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "briefing": text,
                    "cached": cached,
                })
            );
        }
        OutputFormat::Text => {
            if cached {
                eprintln!("(cached)");
            }
            println!("{}", text);
        }
    }

    Ok(())
}
