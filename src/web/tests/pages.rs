use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use routing::{RouteRevision, leaderboard_routes};
use tower::ServiceExt;
use web::{LeaderboardAppData, LeaderboardServer};

fn app(revision: RouteRevision) -> Router {
    let routes = leaderboard_routes(revision).unwrap();
    LeaderboardServer::app(LeaderboardAppData::new(routes, revision))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_root_renders_leaderboard() {
    let (status, body) = get(app(RouteRevision::WithStats), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-route="Leaderboard""#));
    assert!(body.contains(r#"data-view="leaderboard""#));
    assert!(body.contains(r#"data-player-link="/playerDetail/:id""#));
}

#[tokio::test]
async fn test_player_detail_renders_id() {
    let (status, body) = get(app(RouteRevision::WithStats), "/playerDetail/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-route="PlayerDetail""#));
    assert!(body.contains(r#"data-param-id="42""#));
    assert!(body.contains("<title>Player 42</title>"));
}

#[tokio::test]
async fn test_player_detail_with_query_and_trailing_slash() {
    let (status, body) = get(app(RouteRevision::Classic), "/playerDetail/7/?tab=games").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-param-id="7""#));
}

#[tokio::test]
async fn test_stats_page_in_stats_revision() {
    let (status, body) = get(app(RouteRevision::WithStats), "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-view="stats""#));
    assert!(body.contains(r#"href="/stats""#));
}

#[tokio::test]
async fn test_stats_not_found_in_classic_revision() {
    let (status, body) = get(app(RouteRevision::Classic), "/stats").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<code>/stats</code>"));
    assert!(!body.contains(r#"href="/stats""#));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, _) = get(app(RouteRevision::WithStats), "/players/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_styles_are_served() {
    let response = app(RouteRevision::WithStats)
        .oneshot(Request::builder().uri("/styles.css").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

#[tokio::test]
async fn test_post_to_page_is_rejected() {
    let response = app(RouteRevision::WithStats)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_post_to_unknown_path_is_not_found() {
    for uri in ["/nope", "/styles.css"] {
        let response = app(RouteRevision::WithStats)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "POST {}", uri);
    }
}

#[tokio::test]
async fn test_post_to_stats_in_classic_is_not_found() {
    let response = app(RouteRevision::Classic)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
