use crate::LeaderboardAppData;
use crate::api::api_routes;
use crate::common::page_handler::page_handler;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    /// Page paths are not registered with axum: every request that misses
    /// the API falls back to the route table.
    pub fn create() -> Router<LeaderboardAppData> {
        Router::<LeaderboardAppData>::new()
            .merge(api_routes())
            .fallback(page_handler)
    }
}
