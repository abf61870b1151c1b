//! Service layer containing the bot's behaviour independent of Discord.
//!
//! Services sit between the command handlers in `bot/` and the persistence layer in `data/`.
//! The core services (`locator`, `resolver`, `session`) have no Discord or transcoder types in
//! their signatures; the remaining ones wrap the collaborators the commands talk to.
//!
//! - `locator` - Share-link to direct-download URL rewriting
//! - `resolver` - Fold-insensitive movie name lookup and suggestions
//! - `session` - Per-guild watch session slot with idle eviction
//! - `movie` - Registry ownership with write-through persistence
//! - `probe` - HTTP reachability check for movie links
//! - `occupancy` - Counting humans in a voice channel
//! - `playback` - Voice connections and the audio relay

pub mod locator;
pub mod movie;
pub mod occupancy;
pub mod playback;
pub mod probe;
pub mod resolver;
pub mod session;
