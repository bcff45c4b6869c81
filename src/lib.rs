pub mod cli;
pub mod knowledge;
pub mod models;
pub mod server;
pub mod service;

use cli::Args;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Port: {}", args.port);
    info!("Knowledge Base Path: {}", args.knowledge_path);
    info!(
        "API Key Auth: {}",
        if args.api_key.as_deref().map_or(false, |k| !k.trim().is_empty()) {
            "enabled"
        } else {
            "disabled"
        }
    );
    info!("-------------------------");

    let server = Server::new(args);
    server.run().await?;

    Ok(())
}
