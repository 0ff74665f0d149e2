use routing::{LEADERBOARD, RouteParams, RouteTable, STATS};

pub struct MenuSection {
    pub items: Vec<MenuItem>,
}

pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub active: bool,
}

pub struct PageParam {
    pub name: String,
    pub value: String,
}

/// Navigation for every page; only lists routes the table actually has.
pub fn page_menu(routes: &RouteTable, current_route: Option<&str>) -> Vec<MenuSection> {
    let entries = [
        (LEADERBOARD, "Leaderboard", "fa-trophy"),
        (STATS, "Stats", "fa-chart-bar"),
    ];

    let items = entries
        .iter()
        .filter_map(|&(name, title, icon)| {
            let url = routes.href(name, &RouteParams::new()).ok()?;
            Some(MenuItem {
                title: title.to_string(),
                url,
                icon: icon.to_string(),
                active: current_route == Some(name),
            })
        })
        .collect();

    vec![MenuSection { items }]
}

pub fn page_params(params: &RouteParams) -> Vec<PageParam> {
    params
        .iter()
        .map(|(name, value)| PageParam {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use routing::{RouteRevision, leaderboard_routes};

    #[test]
    fn test_menu_with_stats() {
        let routes = leaderboard_routes(RouteRevision::WithStats).unwrap();
        let menu = page_menu(&routes, Some(STATS));

        let items = &menu[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].url, "/");
        assert!(!items[0].active);
        assert_eq!(items[1].url, "/stats");
        assert!(items[1].active);
    }

    #[test]
    fn test_menu_without_stats() {
        let routes = leaderboard_routes(RouteRevision::Classic).unwrap();
        let menu = page_menu(&routes, None);

        let urls: Vec<&str> = menu[0].items.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, vec!["/"]);
    }
}
