use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};

use time_deposit_backend::db::DbConnection;
use time_deposit_backend::domain::{DepositService, InterestCalculatorSet};
use time_deposit_backend::rest::{self, AppState};
use time_deposit_backend::storage::SqliteDepositStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Setting up database");
    let db = DbConnection::init().await?;

    // Wire the service explicitly: the store and the calculator set are
    // constructed once at startup and handed to the service
    let store = Arc::new(SqliteDepositStore::new(db));
    let calculators = Arc::new(InterestCalculatorSet::standard());
    let deposit_service = DepositService::new(store, calculators);

    let state = AppState::new(deposit_service);

    // CORS setup to allow browser clients to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route("/deposits", get(rest::list_deposits))
        .route("/deposits/update-balance", put(rest::update_balance));

    // Define our main application router
    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
