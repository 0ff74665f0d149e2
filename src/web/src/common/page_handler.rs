use crate::LeaderboardAppData;
use crate::common::default_handler::default_handler;
use crate::leaderboard::leaderboard_action;
use crate::player::player_detail_action;
use crate::stats::stats_action;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use routing::View;

/// Resolves the request path against the route table and renders the
/// page of the matched view. Only GET and HEAD are served for matched
/// routes; unmatched paths go to [`default_handler`].
pub async fn page_handler(
    State(state): State<LeaderboardAppData>,
    method: Method,
    uri: Uri,
) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let Some(matched) = state.routes.resolve(target) else {
        return default_handler(&state, &method, &uri);
    };

    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match matched.view() {
        View::Leaderboard => leaderboard_action(&state, &matched).into_response(),
        View::PlayerDetail => player_detail_action(&state, &matched).into_response(),
        View::Stats => stats_action(&state, &matched).into_response(),
    }
}
