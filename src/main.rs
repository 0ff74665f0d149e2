use env_logger::Env;
use log::info;
use routing::leaderboard_routes;
use web::{LeaderboardAppData, LeaderboardServer, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = ServerConfig::from_env()?;

    let routes = leaderboard_routes(config.revision)?;

    for route in routes.routes() {
        info!("route {} -> {} ({})", route.path(), route.name(), route.view());
    }

    let data = LeaderboardAppData::new(routes, config.revision);

    LeaderboardServer::new(config, data).run().await?;

    Ok(())
}
