use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Leaderboard,
    PlayerDetail,
    Stats,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Leaderboard => "leaderboard",
            View::PlayerDetail => "player_detail",
            View::Stats => "stats",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}
