use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

mod cache;
mod chat;
mod config;
mod error;
mod handlers;
mod ip;
mod logging;
mod metrics;
mod models;
mod notify;
mod rate_limit;
mod state;

use config::Args;
use state::AppState;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    logging::init_logger().expect("failed to initialize logger");

    let token = match args.resolve_token() {
        Some(token) => token,
        None => {
            eprintln!("missing bot token: pass --token or set RELAY_TOKEN");
            std::process::exit(1);
        }
    };

    // creating shared state
    let state = Arc::new(AppState::new(&args, token));

    // creating the router with routes
    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/applications", post(handlers::submit_application))
        .route("/roles", get(handlers::list_roles))
        .route("/log/{level}", post(handlers::relay_log))
        .route("/feedback/bug", post(handlers::report_bug))
        .route("/feedback/suggestion", post(handlers::report_suggestion))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Relay running on http://localhost:{}", args.port);
    info!("Forwarding to {} (guild {})", args.api_base, args.guild_id);
    info!(
        "Rate limit: one application per IP per {} seconds",
        args.rate_window
    );

    // peer addresses feed the rate limiter when no proxy headers are set
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
