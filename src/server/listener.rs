use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::store::ContentStore;

pub async fn run(cfg: &Config, store: Arc<ContentStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", cfg.port)).await?;
    info!("Web server listening on port {} ...", cfg.port);

    serve(listener, store).await
}

/// Accept loop: each connection is handed to its own task and the loop
/// goes straight back to accepting. There is deliberately no bound on
/// concurrent connections and no admission control.
pub async fn serve(listener: TcpListener, store: Arc<ContentStore>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let store = store.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
