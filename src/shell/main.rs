use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::core::primitives::{Clock, SystemClock};
use attendance::shared::infrastructure::durable_storage::DurableStorage;
use attendance::shared::infrastructure::durable_storage::in_memory::InMemoryStorage;
use attendance::shared::infrastructure::durable_storage::json_file::JsonFileStorage;
use attendance::shell::config::AppConfig;
use attendance::shell::graphql::GRAPHQL_PATH;
use attendance::shell::http::router;
use attendance::shell::state::AppState;
use attendance::shell::workers::spawn_session_binding;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let storage: Arc<dyn DurableStorage> = match &config.session_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "remembering sessions on disk");
            Arc::new(JsonFileStorage::new(path.clone()))
        }
        None => Arc::new(InMemoryStorage::new()),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = AppState::new(&config, storage, clock).context("failed to load demo users")?;
    let binding = spawn_session_binding(&state);
    let app = router(state);

    tracing::info!(
        policy = %config.reclock_policy,
        history_limit = config.history_limit,
        "HTTP endpoint: http://{}, GraphQL endpoint: http://{}{}",
        config.bind_addr,
        config.bind_addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;

    binding.abort();
    Ok(())
}
