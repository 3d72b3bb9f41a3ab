// HTTP request handlers
use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use crate::application::binder::{InputId, Selection};
use crate::domain::figure::Figure;
use crate::domain::metric::Metric;
use crate::presentation::app_state::AppState;

/// One user-driven input change: the id of the input that changed plus the
/// full current value of every watched input.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub changed: String,
    pub metric: String,
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The interactive page carrying the layout tree.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.layout.render_page())
}

/// Recompute every chart watching the changed input and return the fresh
/// figures keyed by output element id. Each affected cell recomputes
/// exactly once per call; the client replaces its charts with the result.
pub async fn update_charts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> impl IntoResponse {
    let Some(changed) = InputId::parse(&request.changed) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("unknown input '{}'", request.changed),
        )
            .into_response();
    };

    // A metric outside the three fixed options cannot come from the UI;
    // programmatic callers get a loud failure instead of a default.
    let metric = match Metric::parse(&request.metric) {
        Ok(metric) => metric,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let selection = Selection {
        metric,
        countries: request.countries,
    };

    tracing::debug!(
        "Recomputing charts watching {} ({} countries selected)",
        changed.as_str(),
        selection.countries.len()
    );

    let outputs = state.binder.dispatch(&state.table, changed, &selection);
    let figures: BTreeMap<&'static str, Figure> = outputs
        .into_iter()
        .map(|(id, figure)| (id.as_str(), figure))
        .collect();

    Json(figures).into_response()
}
