//! `/add_movie` - register a movie (administrators only).

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup, InteractionContext, Permissions,
};
use url::Url;

use crate::{
    bot::{
        command::{require_admin, string_option},
        embed,
    },
    config::PlaybackMode,
    error::AppError,
    model::movie::Locator,
    state::AppState,
};

/// Hosts whose share links the normalizer knows how to turn into direct downloads.
const ACCEPTED_HOSTS: [&str; 2] = ["drive.google.com", "docs.google.com"];

pub fn register() -> CreateCommand {
    CreateCommand::new("add_movie")
        .description("Add a new movie from Google Drive")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .contexts(vec![InteractionContext::Guild])
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Movie name")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "google_drive_url",
                "Google Drive share link (or a file path when the bot relays audio)",
            )
            .required(true),
        )
}

/// Adds a movie after validating and probing its source.
///
/// Links must point at Google Drive or Docs and serve content once normalized. Local paths are
/// accepted only in relay mode and only when the file exists on the bot's machine.
pub async fn run(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_admin(command)?;
    let name = string_option(command, "name")?;
    let raw_source = string_option(command, "google_drive_url")?;

    let locator = validate_source(&raw_source, state.playback_mode)?;

    command.defer(&ctx.http).await?;

    match &locator {
        Locator::HostedLink(_) => {
            let direct = locator.stream_source();
            if !state.probe.reachable(&direct).await {
                tracing::warn!("Rejected unreachable movie link {}", direct);
                command
                    .create_followup(
                        &ctx.http,
                        CreateInteractionResponseFollowup::new().embed(embed::add_unreachable()),
                    )
                    .await?;
                return Ok(());
            }
        }
        Locator::LocalPath(path) => {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(AppError::BadRequest(format!(
                    "File not found: `{}`",
                    path.display()
                )));
            }
        }
    }

    let movie = state.movies.add(&name, locator).await?;
    let total = state.movies.count().await;

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().embed(embed::movie_added(&movie, total)),
        )
        .await?;

    Ok(())
}

/// Classifies the submitted source and checks it is allowed in the current mode.
///
/// # Returns
/// - `Ok(Locator)` - A Drive/Docs link, or a local path in relay mode
/// - `Err(AppError::BadRequest)` - Any other host, a malformed URL, or a path in link mode
fn validate_source(raw: &str, mode: PlaybackMode) -> Result<Locator, AppError> {
    let invalid_url = || AppError::BadRequest("Please provide a valid Google Drive URL!".to_string());

    match Locator::parse(raw) {
        Locator::HostedLink(link) => {
            let url = Url::parse(&link).map_err(|_| invalid_url())?;
            if url
                .host_str()
                .is_some_and(|host| ACCEPTED_HOSTS.contains(&host))
            {
                Ok(Locator::HostedLink(link))
            } else {
                Err(invalid_url())
            }
        }
        Locator::LocalPath(path) if mode == PlaybackMode::Relay && !path.as_os_str().is_empty() => {
            Ok(Locator::LocalPath(path))
        }
        Locator::LocalPath(_) => Err(invalid_url()),
    }
}
