mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;

use songbird::Songbird;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::probe::LinkProbe, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    let movies = startup::load_movies(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(
        &config,
        movies,
        LinkProbe::new(http_client),
        Songbird::serenity(),
    );

    tracing::info!(
        "Starting Discord Movie Bot in {:?} mode",
        config.playback_mode
    );

    bot::start::start_bot(&config, state).await
}
