use std::env;

use tracing_subscriber::EnvFilter;

use wutong_server::state::AppState;
use wutong_server::{app, config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = config::load_config()?;
    init_tracing(config.log_json);
    tracing::info!(version = config.config_version, "config loaded");

    let bind_addr = env::var("WUTONG_BIND_ADDR").unwrap_or_else(|_| config.bind_addr.clone());
    let state = AppState::new(&config);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        rescue = ?config.policy.rescue,
        halving = ?config.policy.halving,
        "listening"
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
