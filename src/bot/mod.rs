//! Discord bot integration.
//!
//! This module wires the services into Serenity: the event handler reacts to slash commands,
//! autocomplete requests and voice state changes, and `start` builds and runs the client with
//! Songbird registered for voice.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data in the cache, needed for channel names
//! - `GUILD_VOICE_STATES` - Voice state changes, used to find the invoker's channel, count
//!   occupants for idle eviction and drive Songbird's voice connections
//!
//! Neither intent is privileged.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
