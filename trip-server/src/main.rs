use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trip_server::cache::{CacheConfig, CachedCatalogClient};
use trip_server::catalog::{CatalogClient, CatalogConfig};
use trip_server::planner::TravelPlanner;
use trip_server::strategy::default_strategies;
use trip_server::web::{AppState, CatalogSearchProvider, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("CATALOG_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("CATALOG_API_KEY not set; catalog calls will fail");
        String::new()
    });

    // Create catalog client
    let mut catalog_config = CatalogConfig::new(api_key);
    if let Ok(base_url) = std::env::var("CATALOG_BASE_URL") {
        catalog_config = catalog_config.with_base_url(base_url);
    }
    let client = CatalogClient::new(catalog_config).expect("Failed to create catalog client");

    // Create cached client
    let cached = CachedCatalogClient::new(client, &CacheConfig::default());

    // Build the planner with the full strategy set; "cheapest" is the default
    let provider = CatalogSearchProvider::new(Arc::new(cached));
    let planner = TravelPlanner::new(provider, default_strategies())
        .expect("Failed to build strategy registry");

    // Build app state and router
    let state = AppState::new(planner);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("Travel planner listening on http://{addr}");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  POST /trip/plan     - Plan a trip");
    tracing::info!("  GET  /trip/preview  - Rebuild itinerary from last search");
    tracing::info!("  GET  /strategy      - Show ranking strategies");
    tracing::info!("  PUT  /strategy      - Switch ranking strategy");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
