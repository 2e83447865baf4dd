use anyhow::Context;
use cohort_config::AppConfig;
use cohort_db::RecordStore;
use cohort_server::Server;

use crate::cli::ServeArgs;

/// Open the configured store and serve the API until shutdown.
pub async fn handle(args: ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(database) = args.database {
        config.database.url = database;
    }

    let store = RecordStore::open(&config.database)
        .await
        .with_context(|| format!("failed to open record store at {}", config.database.url))?;
    tracing::info!(
        database = %config.database.url,
        remote = config.database.is_remote(),
        "record store ready"
    );

    Server::new(config.server, store)
        .run()
        .await
        .context("server failed")
}
