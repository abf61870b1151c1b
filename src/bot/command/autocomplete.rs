//! Movie name autocomplete for `/play`, `/remove_movie` and `/movie_info`.

use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateInteractionResponse,
};

use crate::{error::AppError, service::resolver::MAX_SUGGESTIONS, state::AppState};

/// Answers an autocomplete request with movie names matching the focused option.
///
/// Every autocompleted option in this bot takes a movie name, so the option name is not
/// inspected. Requests without a focused option are ignored.
pub async fn handle(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(focused) = command.data.autocomplete() else {
        return Ok(());
    };

    let suggestions = state.movies.suggest(focused.value, MAX_SUGGESTIONS).await;
    let response = suggestions
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, name| {
            response.add_string_choice(name.clone(), name)
        });

    command
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await?;

    Ok(())
}
