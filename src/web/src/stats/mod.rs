use crate::views::{self, MenuSection};
use crate::{ApiResult, LeaderboardAppData};
use askama::Template;
use routing::RouteMatch;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "stats/index.html")]
pub struct StatsTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub route_name: String,
    pub view: String,
    pub menu_sections: Vec<MenuSection>,
}

pub fn stats_action(state: &LeaderboardAppData, matched: &RouteMatch<'_>) -> ApiResult<StatsTemplate> {
    Ok(StatsTemplate {
        css_version: crate::common::default_handler::CSS_VERSION,
        title: "Stats".to_string(),
        route_name: matched.name().to_string(),
        view: matched.view().to_string(),
        menu_sections: views::page_menu(&state.routes, Some(matched.name())),
    })
}
