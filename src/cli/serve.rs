use clap::Args;

use crate::config::Config;
use crate::server::Server;

#[derive(Args)]
pub struct ServeCommand {
    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(long, short)]
    pub port: Option<u16>,
}

pub async fn handle(cmd: ServeCommand, config: Config) -> anyhow::Result<()> {
    let mut server_config = config.server;
    if let Some(host) = cmd.host {
        server_config.host = host;
    }
    if let Some(port) = cmd.port {
        server_config.port = port;
    }

    let server = Server::new(&server_config).await?;

    println!(
        "model-router starting on http://{}:{}",
        server_config.host, server_config.port
    );
    println!("Press Ctrl+C to stop\n");

    server.run().await?;

    Ok(())
}
