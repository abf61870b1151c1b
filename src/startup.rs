use reqwest::redirect::Policy;

use crate::{
    config::Config,
    data::registry::RegistryStore,
    error::AppError,
    service::{movie::MovieService, probe::PROBE_TIMEOUT},
};

/// Maximum redirects followed when probing a movie link.
///
/// Drive download links bounce through a couple of hosts before serving content.
const MAX_PROBE_REDIRECTS: usize = 10;

/// Builds the HTTP client used for link probes.
///
/// Redirects are followed up to a fixed limit so Drive's download hops resolve, while a
/// redirect loop still ends the probe.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - The TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(Policy::limited(MAX_PROBE_REDIRECTS))
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Loads the movie registry named in the configuration.
///
/// Creates an empty registry file if none exists yet, so a fresh deployment starts with an
/// empty movie list instead of failing.
///
/// # Arguments
/// - `config` - Application configuration containing the registry path
///
/// # Returns
/// - `Ok(MovieService)` - Service holding the loaded registry
/// - `Err(AppError::RegistryErr)` - The file exists but could not be read or parsed
pub async fn load_movies(config: &Config) -> Result<MovieService, AppError> {
    MovieService::load(RegistryStore::new(&config.movie_list_file)).await
}
