pub mod api;

use crate::cli::Args;
use log::{ info, warn };
use std::error::Error;
use std::net::SocketAddr;

pub struct Server {
    args: Args,
}

impl Server {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let api_key = self.args.api_key.clone().filter(|k| !k.trim().is_empty());
        if api_key.is_some() {
            info!("Server configured with API Key authentication.");
        } else {
            warn!("Server configured WITHOUT API Key authentication. Requests are open.");
        }

        let state = api::AppState {
            api_key,
            knowledge_path: self.args.knowledge_path.clone(),
        };
        let app = api::build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.args.port));
        info!("HTTP server listening on: http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
