use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_dir());

    Router::new()
        .route("/", get(handlers::home))
        .nest_service("/static", assets)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
