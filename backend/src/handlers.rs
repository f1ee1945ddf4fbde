use std::fmt::Display;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use folio_shared::{aggregate_skills, parse_profile};
use serde::Serialize;

use crate::{render, state::AppState};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Render the portfolio page from the current profile file.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    let path = state.profile_path();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| internal_error(&format!("Failed to read {}", path.display()), e))?;
    let mut profile =
        parse_profile(&raw).map_err(|e| internal_error("Invalid profile data", e))?;

    // Always aggregate skills from projects for consistency
    profile.skills = aggregate_skills(&profile.projects);

    Ok(Html(render::render_page(&profile)))
}

fn internal_error(context: &str, err: impl Display) -> HandlerError {
    tracing::error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: {err}"),
            code: 500,
        }),
    )
}
