mod error;
mod location;
mod params;
mod pattern;
mod revision;
mod route;
mod table;
mod view;

pub use error::{RouteError, RouteResult};
pub use location::Location;
pub use params::RouteParams;
pub use pattern::{BuildError, PathPattern, Segment};
pub use revision::{LEADERBOARD, PLAYER_DETAIL, RouteRevision, STATS, leaderboard_routes};
pub use route::{Route, RouteMatch};
pub use table::{RouteTable, RouteTableBuilder};
pub use view::View;
