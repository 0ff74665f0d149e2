pub mod routes;

pub use routes::api_routes;

use crate::{ApiError, ApiResult, LeaderboardAppData};
use axum::Json;
use axum::extract::{Path, Query, State};
use routing::{RouteParams, View};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct RouteDto {
    pub path: String,
    pub name: String,
    pub view: View,
}

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub path: Option<String>,
}

#[derive(Serialize)]
pub struct HrefResponse {
    pub href: String,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub name: String,
    pub view: View,
    pub pattern: String,
    pub params: RouteParams,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
}

pub async fn routes_list_action(State(state): State<LeaderboardAppData>) -> Json<Vec<RouteDto>> {
    let routes = state
        .routes
        .routes()
        .iter()
        .map(|route| RouteDto {
            path: route.path().to_string(),
            name: route.name().to_string(),
            view: route.view(),
        })
        .collect();

    Json(routes)
}

pub async fn resolve_action(
    State(state): State<LeaderboardAppData>,
    Query(request): Query<ResolveRequest>,
) -> ApiResult<Json<ResolveResponse>> {
    let path = request
        .path
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'path' is required".to_string()))?;

    let matched = state
        .routes
        .resolve(&path)
        .ok_or_else(|| ApiError::NotFound(format!("No route matches '{}'", path)))?;

    Ok(Json(ResolveResponse {
        name: matched.name().to_string(),
        view: matched.view(),
        pattern: matched.route.path().to_string(),
        query: matched.location.query().clone(),
        hash: matched.location.hash().map(str::to_string),
        params: matched.params,
    }))
}

/// Reverse routing: query parameters fill the named route's path parameters.
pub async fn href_action(
    State(state): State<LeaderboardAppData>,
    Path(name): Path<String>,
    Query(params): Query<BTreeMap<String, String>>,
) -> ApiResult<Json<HrefResponse>> {
    let params: RouteParams = params.into_iter().collect();

    let href = state.routes.href(&name, &params)?;

    Ok(Json(HrefResponse { href }))
}
