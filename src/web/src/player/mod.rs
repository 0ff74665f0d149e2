use crate::views::{self, MenuSection, PageParam};
use crate::{ApiError, ApiResult, LeaderboardAppData};
use askama::Template;
use routing::RouteMatch;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "player/detail/index.html")]
pub struct PlayerDetailTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub route_name: String,
    pub view: String,
    pub menu_sections: Vec<MenuSection>,
    pub player_id: String,
    pub params: Vec<PageParam>,
}

pub fn player_detail_action(
    state: &LeaderboardAppData,
    matched: &RouteMatch<'_>,
) -> ApiResult<PlayerDetailTemplate> {
    let player_id = matched
        .param("id")
        .ok_or_else(|| ApiError::BadRequest("Player id is missing".to_string()))?;

    Ok(PlayerDetailTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        title: format!("Player {}", player_id),
        route_name: matched.name().to_string(),
        view: matched.view().to_string(),
        menu_sections: views::page_menu(&state.routes, Some(matched.name())),
        player_id: player_id.to_string(),
        params: views::page_params(&matched.params),
    })
}
