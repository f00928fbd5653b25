//! runmetrics server
//!
//! Accepts `POST /update/<kind>/<name>/<value>` and keeps gauges and counters
//! in memory for the lifetime of the process.

use tracing_subscriber::{fmt, EnvFilter};

use runmetrics_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let state = app_state::AppState::new(cfg);
    let listen = state
        .cfg()
        .server
        .listen_addr()
        .expect("server.listen must be a valid SocketAddr");
    let app = router::build_router(state);

    tracing::info!(%listen, "runmetrics-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
