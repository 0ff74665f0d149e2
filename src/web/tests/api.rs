use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use routing::{RouteRevision, leaderboard_routes};
use serde_json::{Value, json};
use tower::ServiceExt;
use web::{LeaderboardAppData, LeaderboardServer};

fn app(revision: RouteRevision) -> Router {
    let routes = leaderboard_routes(revision).unwrap();
    LeaderboardServer::app(LeaderboardAppData::new(routes, revision))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_routes_list() {
    let (status, body) = get_json(app(RouteRevision::WithStats), "/api/routes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "path": "/", "name": "Leaderboard", "view": "leaderboard" },
            { "path": "/playerDetail/:id", "name": "PlayerDetail", "view": "player_detail" },
            { "path": "/stats", "name": "Stats", "view": "stats" },
        ])
    );
}

#[tokio::test]
async fn test_routes_list_classic() {
    let (_, body) = get_json(app(RouteRevision::Classic), "/api/routes").await;

    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_resolve_player_detail() {
    let (status, body) = get_json(
        app(RouteRevision::WithStats),
        "/api/resolve?path=%2FplayerDetail%2F42%3Ftab%3Dgames",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "PlayerDetail");
    assert_eq!(body["view"], "player_detail");
    assert_eq!(body["pattern"], "/playerDetail/:id");
    assert_eq!(body["params"], json!({ "id": "42" }));
    assert_eq!(body["query"], json!({ "tab": "games" }));
    assert_eq!(body["hash"], Value::Null);
}

#[tokio::test]
async fn test_resolve_stats_in_classic_is_not_found() {
    let (status, body) = get_json(app(RouteRevision::Classic), "/api/resolve?path=/stats").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No route matches '/stats'");
}

#[tokio::test]
async fn test_resolve_requires_path() {
    let (status, _) = get_json(app(RouteRevision::WithStats), "/api/resolve").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_href_for_player_detail() {
    let (status, body) = get_json(app(RouteRevision::WithStats), "/api/href/PlayerDetail?id=van%20Dijk").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["href"], "/playerDetail/van%20Dijk");
}

#[tokio::test]
async fn test_href_errors() {
    let (status, _) = get_json(app(RouteRevision::WithStats), "/api/href/PlayerDetail").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(app(RouteRevision::Classic), "/api/href/Stats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no route named 'Stats'");
}

#[tokio::test]
async fn test_href_rejects_dot_segment_id() {
    for id in [".", "..", "%2E%2E"] {
        let uri = format!("/api/href/PlayerDetail?id={}", id);
        let (status, _) = get_json(app(RouteRevision::WithStats), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "id {}", id);
    }
}
