use crate::LeaderboardAppData;
use crate::views::{self, MenuSection};
use askama::Template;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use log::debug;
use rust_embed::RustEmbed;

// Provides CSS_VERSION for cache-busting query params
include!(concat!(env!("OUT_DIR"), "/css_hash.rs"));

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub path: String,
    pub menu_sections: Vec<MenuSection>,
}

fn cache_control_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("woff2" | "woff" | "ttf" | "otf") => "public, max-age=31536000, immutable",
        Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico") => "public, max-age=86400",
        Some("css" | "js") => "public, max-age=3600",
        _ => "public, max-age=3600",
    }
}

/// Serves static files from the embedded assets, or the not-found page
pub fn default_handler(state: &LeaderboardAppData, method: &Method, uri: &Uri) -> Response {
    let path_str = uri.path().trim_start_matches('/');
    let is_read = *method == Method::GET || *method == Method::HEAD;

    if let Some(content) = Assets::get(path_str).filter(|_| is_read) {
        let mime = mime_guess::from_path(path_str).first_or_octet_stream();
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.to_string()),
                (header::CACHE_CONTROL, cache_control_for(path_str).to_string()),
            ],
            content.data,
        )
            .into_response();
    }

    debug!("not found: {}", uri.path());

    let page = NotFoundTemplate {
        css_version: CSS_VERSION,
        title: "Not found".to_string(),
        path: uri.path().to_string(),
        menu_sections: views::page_menu(&state.routes, None),
    };

    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "no-cache")],
        page,
    )
        .into_response()
}
