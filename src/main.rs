use crate::config::Config;
use crate::remote::HttpBackend;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod domain;
mod errors;
mod remote;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid BIND_ADDR {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    let backend = match HttpBackend::new(&config.backend_url, config.http_timeout) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Backend client setup failed: {e}");
            std::process::exit(1);
        }
    };

    info!("Listings backend at {}", config.backend_url);
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(config, Arc::new(backend));

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(&err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
