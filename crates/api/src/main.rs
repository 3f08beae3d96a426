use std::sync::Arc;

use anyhow::Context;

use pharmacy_infra::{Config, RecordStore, SqliteRecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pharmacy_observability::init();

    let config = Config::from_env().context("failed to read configuration")?;

    let store = SqliteRecordStore::open(&config.database_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_path.display()))?;
    store
        .create_table()
        .await
        .context("failed to create inventory table")?;

    let app = pharmacy_api::app::build_app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!(
        database = %config.database_path.display(),
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
