use crate::config::DjConfig;
use dj_core::{build_generator, Clock, KvStore, MemoryKvStore, RedbKvStore, SystemClock};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run(config: DjConfig) -> anyhow::Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        anyhow::bail!("Invalid configuration:\n  - {}", errors.join("\n  - "));
    }

    let addr = config.http_addr()?;
    info!("Starting Feedback DJ v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP: {}", addr);

    let storage: Arc<dyn KvStore> = if config.server.ephemeral {
        warn!("Ephemeral mode — feedback and briefings are lost on shutdown");
        Arc::new(MemoryKvStore::new())
    } else {
        info!("Opening database at {:?}...", config.db_path());
        let store = RedbKvStore::open(config.db_path())?;
        info!("Database loaded: {} keys", store.key_count()?);
        Arc::new(store)
    };

    let generator = build_generator(&config.generator_config())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let app_state = crate::http::AppState::new(
        storage,
        generator,
        clock,
        config.feedback_config(),
        config.briefing_config(),
    );
    let app = crate::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Feedback DJ ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received, terminating...");
        })
        .await?;

    Ok(())
}
