use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod handlers;
mod logic;
mod state;

use crate::handlers::{
    clear_handler, draw_curve_handler, draw_ellipse_handler, draw_line_handler, draw_rect_handler,
    history_handler, ws_handler,
};
use crate::state::AppState;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slateboard_server=info,tower_http=info".into()),
        )
        .init();

    let state = AppState::new();

    let app = Router::new()
        .route("/history", get(history_handler))
        .route("/clear", post(clear_handler))
        .route("/draw_line", post(draw_line_handler))
        .route("/draw_ellipse", post(draw_ellipse_handler))
        .route("/draw_rect", post(draw_rect_handler))
        .route("/draw_curve", post(draw_curve_handler))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(args.port);
    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), port))
        .await
        .expect("Failed to bind server");
    info!(bind = %args.bind, port, "board server listening");

    axum::serve(listener, app).await.expect("Server crashed");
}
