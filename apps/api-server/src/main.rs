//! Daily Diet API server binary.

use std::net::SocketAddr;

use api_server::{config::Config, create_app, create_state, init_tracing};
use meal_store::SqliteMealStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&config.log_level);

    tracing::info!("Starting Daily Diet API server");

    let store = SqliteMealStore::connect(&config.database_url).await?;

    let state = create_state(config.clone(), store);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
