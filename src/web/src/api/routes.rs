use crate::LeaderboardAppData;
use axum::Router;
use axum::routing::get;

pub fn api_routes() -> Router<LeaderboardAppData> {
    Router::new()
        .route("/api/routes", get(super::routes_list_action))
        .route("/api/resolve", get(super::resolve_action))
        .route("/api/href/{name}", get(super::href_action))
}
