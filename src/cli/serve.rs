use std::sync::Arc;

use crate::{audius::AudiusClient, config, error, info, server};

pub async fn serve(addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);

    let catalog = match AudiusClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Failed to create Audius client. Err: {}", e),
    };
    info!("Using Audius API at {}", catalog.config().api_url);

    if let Err(e) = server::start_api_server(&addr, Arc::new(catalog)).await {
        error!("Server stopped. Err: {}", e);
    }
}
