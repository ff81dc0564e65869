mod dispatch;
mod forward;
mod router;

pub use dispatch::{resolve, Dispatch};

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::providers::RoutingTable;

pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::default())
            .build()?;

        let router = router::create_router(RoutingTable::builtin(), client);

        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
