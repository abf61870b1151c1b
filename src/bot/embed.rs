//! Embed builders for command replies.
//!
//! Every user-visible embed the bot posts is built here so the command handlers only decide
//! *which* message to send. Builders are pure and take plain values, which keeps them testable
//! without a Discord connection.

use chrono::Duration;
use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{config::PlaybackMode, model::movie::MovieEntry};

const COLOR_SUCCESS: u32 = 0x00ff00;
const COLOR_WARNING: u32 = 0xff9900;
const COLOR_INFO: u32 = 0x0099ff;
const COLOR_ENDED: u32 = 0xff6b6b;

/// Names shown per `/movies` embed.
pub const MOVIES_PER_PAGE: usize = 20;

const SHARING_STEPS: &str = "1. Right-click the file in Google Drive\n\
    2. Select 'Share'\n\
    3. Change to 'Anyone with the link'\n\
    4. Set permission to 'Viewer'";

/// Builds the announcement posted when a watch party starts.
///
/// Hosted movies get a clickable link everyone opens; in relay mode the embed also says that
/// audio is streaming into the channel. Local files have no link to share.
///
/// # Arguments
/// - `movie` - The movie being watched
/// - `channel_name` - Voice channel the bot joined
/// - `mode` - Playback mode the party runs in
///
/// # Returns
/// - `CreateEmbed` - Watch party embed
pub fn watch_party_started(movie: &MovieEntry, channel_name: &str, mode: PlaybackMode) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("🎬 Movie Watch Party Started!")
        .description(format!(
            "**Movie:** {}\n**Voice Channel:** {}",
            movie.name, channel_name
        ))
        .color(COLOR_SUCCESS);

    if movie.locator.is_hosted() {
        embed = embed.field(
            "🔗 Watch Here",
            format!(
                "[**Click to Open Movie**]({})\n*Everyone click this link to watch together!*",
                movie.locator.stream_source()
            ),
            false,
        );
    }

    let instructions = match mode {
        PlaybackMode::Link => {
            "1. **Everyone** click the movie link above\n\
             2. **Stay** in the voice channel to chat\n\
             3. **Coordinate** play/pause in voice chat\n\
             4. Use `/stop` when done"
        }
        PlaybackMode::Relay => {
            "1. **Join** the voice channel to hear the movie\n\
             2. **Chat** along in voice\n\
             3. Use `/stop` when done"
        }
    };

    embed
        .field("📋 Instructions", instructions, false)
        .field(
            "💡 Pro Tips",
            "• Use Discord's screen share for better sync\n\
             • Nominate someone as the 'play button coordinator'\n\
             • Use voice chat for reactions and commentary!",
            false,
        )
        .footer(CreateEmbedFooter::new(
            "🤖 Bot will stay in voice channel until everyone leaves or /stop is used",
        ))
}

/// Plain-text message with the bare direct link, posted after the watch party embed.
pub fn direct_link_message(url: &str) -> String {
    format!(
        "🎥 **Direct Movie Link:** {}\n\n*Copy this link if needed!*",
        url
    )
}

/// Warning shown by `/play` when the movie's link does not serve content.
pub fn link_unreachable(movie_name: &str, url: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("⚠️ Movie URL Issue")
        .description(format!(
            "**{}** - The Google Drive link may not be publicly accessible.",
            movie_name
        ))
        .color(COLOR_WARNING)
        .field("How to fix:", SHARING_STEPS, false)
        .field("Try anyway?", format!("[Direct Link]({})", url), false)
}

/// Warning shown by `/add_movie` when the submitted link does not serve content.
pub fn add_unreachable() -> CreateEmbed {
    CreateEmbed::new()
        .title("⚠️ URL Not Accessible")
        .description("The Google Drive link doesn't seem to be publicly accessible.")
        .color(COLOR_WARNING)
        .field(
            "How to fix:",
            format!("{}\n5. Copy the link and try again", SHARING_STEPS),
            false,
        )
}

/// Builds the reply to `/stop`.
///
/// # Arguments
/// - `channel_name` - Voice channel the bot left
/// - `watched_for` - How long the session ran, if known
pub fn watch_party_ended(channel_name: &str, watched_for: Option<Duration>) -> CreateEmbed {
    let mut description = format!(
        "Left voice channel: **{}**\nThanks for watching together! 🍿",
        channel_name
    );
    if let Some(duration) = watched_for {
        description.push_str(&format!("\n*Watched for {}*", format_duration(duration)));
    }

    CreateEmbed::new()
        .title("🎬 Watch Party Ended")
        .description(description)
        .color(COLOR_ENDED)
}

/// Formats a session length as `1h 05m` or `12m 30s`.
fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m {:02}s", minutes, seconds)
    }
}

/// Reply to `/movies` when the registry is empty.
pub fn no_movies() -> CreateEmbed {
    CreateEmbed::new()
        .title("🎬 No Movies Available")
        .description("No movies have been added yet!")
        .color(COLOR_WARNING)
        .field(
            "How to add movies:",
            "Use `/add_movie <name> <google_drive_url>`",
            false,
        )
        .field(
            "Example:",
            "`/add_movie Superman https://drive.google.com/file/d/abc123...`",
            false,
        )
}

/// Splits the movie list into pages of [`MOVIES_PER_PAGE`] names.
///
/// Page numbers are only shown in the title when there is more than one page.
///
/// # Returns
/// - `Vec<CreateEmbed>` - One embed per page, empty when `names` is empty
pub fn movie_list(names: &[String]) -> Vec<CreateEmbed> {
    let pages = names.len().div_ceil(MOVIES_PER_PAGE);

    names
        .chunks(MOVIES_PER_PAGE)
        .enumerate()
        .map(|(index, chunk)| {
            let title = if pages > 1 {
                format!("🎬 Available Movies ({}/{})", index + 1, pages)
            } else {
                "🎬 Available Movies".to_string()
            };
            let description = chunk
                .iter()
                .map(|name| format!("• **{}**", name))
                .collect::<Vec<_>>()
                .join("\n");

            CreateEmbed::new()
                .title(title)
                .description(description)
                .color(COLOR_INFO)
                .field(
                    "Usage",
                    "Use `/play <movie_name>` to start a watch party (with autocomplete!)",
                    false,
                )
                .field(
                    "Total Movies",
                    format!("{} movies available", names.len()),
                    true,
                )
        })
        .collect()
}

/// Confirmation posted after `/add_movie`.
pub fn movie_added(movie: &MovieEntry, total: usize) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("✅ Movie Added Successfully!")
        .description(format!("**{}** has been added to the movie list.", movie.name))
        .color(COLOR_SUCCESS)
        .field(
            "Usage",
            format!("Use `/play {}` to start a watch party with this movie", movie.name),
            false,
        )
        .field("Total Movies", format!("{} movies now available", total), true);

    if movie.locator.is_hosted() {
        embed = embed.field(
            "Direct Link",
            format!("[Watch in Browser]({})", movie.locator.stream_source()),
            false,
        );
    }

    embed
}

/// Details shown by `/movie_info`.
pub fn movie_info(movie: &MovieEntry) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(format!("🎬 {}", movie.name))
        .description("Movie Information")
        .color(COLOR_INFO);

    let embed = if movie.locator.is_hosted() {
        embed
            .field(
                "Google Drive URL",
                format!("[View File]({})", movie.locator),
                false,
            )
            .field(
                "Direct Stream URL",
                format!("[Direct Link]({})", movie.locator.stream_source()),
                false,
            )
    } else {
        embed.field("Local File", format!("`{}`", movie.locator), false)
    };

    embed.field(
        "Play Command",
        format!("`/play {}` - Start watch party", movie.name),
        false,
    )
}

/// Reply to `/help`.
pub fn help(mode: PlaybackMode) -> CreateEmbed {
    let how_it_works = match mode {
        PlaybackMode::Link => {
            "1. Use `/play MovieName` while in a voice channel\n\
             2. Bot joins and provides movie link\n\
             3. Everyone clicks the link to watch\n\
             4. Stay in voice to chat during the movie!\n\
             5. Use `/stop` when done"
        }
        PlaybackMode::Relay => {
            "1. Use `/play MovieName` while in a voice channel\n\
             2. Bot joins and streams the movie's audio\n\
             3. Hosted movies also get a link to watch along\n\
             4. Stay in voice to chat during the movie!\n\
             5. Use `/stop` when done"
        }
    };

    CreateEmbed::new()
        .title("🎬 Discord Movie Bot Help")
        .description("Start movie watch parties with friends in Discord voice channels!")
        .color(COLOR_INFO)
        .field(
            "🎵 Basic Commands",
            "`/play <movie>` - Start a watch party (with autocomplete!)\n\
             `/stop` - End watch party and leave voice\n\
             `/movies` - List available movies\n\
             `/movie_info <name>` - Movie details",
            false,
        )
        .field(
            "🔧 Admin Commands",
            "`/add_movie <name> <url>` - Add movie\n\
             `/remove_movie <name>` - Remove movie",
            false,
        )
        .field(
            "📁 Adding Movies from Google Drive",
            "1. Upload video to Google Drive\n\
             2. Right-click → Share → 'Anyone with link'\n\
             3. Copy the share URL\n\
             4. Use `/add_movie MovieName <URL>`",
            false,
        )
        .field("🍿 How Watch Parties Work", how_it_works, false)
        .field(
            "✨ Features",
            "• **Watch together**: Everyone gets the same link\n\
             • **Voice chat**: Perfect for reactions and commentary\n\
             • **Auto-cleanup**: Bot leaves when channel is empty\n\
             • **Autocomplete**: Easy movie selection",
            false,
        )
        .field(
            "⚠️ Requirements",
            "• Files must be publicly accessible on Google Drive\n\
             • Coordinate play/pause through voice chat\n\
             • Works with MP4, MKV, AVI, etc.",
            false,
        )
        .footer(CreateEmbedFooter::new("Perfect for movie nights with friends! 🎭"))
}
