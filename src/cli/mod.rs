pub mod routes;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "model-router")]
#[command(about = "Route LLM API calls to a provider picked from the model prefix")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.model-router/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the router
    Serve(serve::ServeCommand),
    /// Show the routing table
    Routes(routes::RoutesCommand),
}
