use crate::{RouteError, RouteResult, RouteTable, View};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const LEADERBOARD: &str = "Leaderboard";
pub const PLAYER_DETAIL: &str = "PlayerDetail";
pub const STATS: &str = "Stats";

/// The two published revisions of the leaderboard route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRevision {
    #[default]
    WithStats,
    /// Revision without the `/stats` page.
    Classic,
}

impl FromStr for RouteRevision {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stats" | "with-stats" => Ok(RouteRevision::WithStats),
            "classic" => Ok(RouteRevision::Classic),
            _ => Err(RouteError::UnknownRevision(s.to_string())),
        }
    }
}

impl Display for RouteRevision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteRevision::WithStats => write!(f, "stats"),
            RouteRevision::Classic => write!(f, "classic"),
        }
    }
}

pub fn leaderboard_routes(revision: RouteRevision) -> RouteResult<RouteTable> {
    let builder = RouteTable::builder()
        .route("/", LEADERBOARD, View::Leaderboard)
        .route("/playerDetail/:id", PLAYER_DETAIL, View::PlayerDetail);

    match revision {
        RouteRevision::WithStats => builder.route("/stats", STATS, View::Stats).build(),
        RouteRevision::Classic => builder.build(),
    }
}
