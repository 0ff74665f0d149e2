use crate::views::{self, MenuSection};
use crate::{ApiResult, LeaderboardAppData};
use askama::Template;
use routing::RouteMatch;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "leaderboard/index.html")]
pub struct LeaderboardTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub route_name: String,
    pub view: String,
    pub menu_sections: Vec<MenuSection>,
    pub player_link_pattern: String,
}

pub fn leaderboard_action(
    state: &LeaderboardAppData,
    matched: &RouteMatch<'_>,
) -> ApiResult<LeaderboardTemplate> {
    let player_link_pattern = state
        .routes
        .get(routing::PLAYER_DETAIL)
        .map(|route| route.path().to_string())
        .unwrap_or_default();

    Ok(LeaderboardTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        title: "Leaderboard".to_string(),
        route_name: matched.name().to_string(),
        view: matched.view().to_string(),
        menu_sections: views::page_menu(&state.routes, Some(matched.name())),
        player_link_pattern,
    })
}
