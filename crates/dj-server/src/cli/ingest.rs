use crate::cli::IngestArgs;
use anyhow::Result;

pub async fn run(args: IngestArgs, server: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/ingest", server.trim_end_matches('/'));

    let mut payload = serde_json::json!({ "text": args.text });
    if let Some(source) = args.source {
        payload["source"] = serde_json::Value::String(source);
    }

    let resp = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP request failed: {}. Is `feedback-dj serve` running?", e))?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await?;
    if !status.is_success() {
        let err = body["error"].as_str().unwrap_or("unknown error");
        anyhow::bail!("{}", err);
    }

    println!("✅ Stored. {} entries.", body["count"].as_u64().unwrap_or(0));
    Ok(())
}
