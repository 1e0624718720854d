use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use route_server::timetable::sample_network;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Seed the graph so the API is queryable out of the box; callers
    // replace it via /graph/reset and /graph/legs.
    let graph = sample_network();
    info!(legs = graph.len(), "loaded sample timetable");

    let state = AppState::new(graph);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Route server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  POST /graph/reset     - Discard all trip legs");
    println!("  POST /graph/legs      - Add a trip leg");
    println!("  GET  /routes/fastest  - Fastest path between stations");
    println!("  POST /booking/seat    - Allocate a seat");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
