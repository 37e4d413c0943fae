use std::sync::Arc;

use snapserve::config::Config;
use snapserve::server;
use snapserve::store::ContentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let store = Arc::new(ContentStore::load(&cfg.root)?);

    tokio::select! {
        res = server::listener::run(&cfg, store) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
