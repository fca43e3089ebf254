use axum::{
    Extension, Router, middleware,
    routing::{MethodRouter, get},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{Res, api, audius::Catalog, success};

fn tracks_route() -> MethodRouter {
    get(api::tracks).post(api::tracks).options(api::preflight)
}

/// Builds the service router around a catalog.
pub fn router(catalog: Arc<dyn Catalog>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/moods", get(api::moods))
        .route("/tracks", tracks_route())
        .route("/api/tracks", tracks_route())
        .layer(Extension(catalog))
        .layer(middleware::map_response(api::cors_headers))
}

/// Serves the router on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, catalog: Arc<dyn Catalog>) -> Res<()> {
    axum::serve(listener, router(catalog)).await?;
    Ok(())
}

pub async fn start_api_server(addr: &str, catalog: Arc<dyn Catalog>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let listener = TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", listener.local_addr()?);

    serve(listener, catalog).await
}
