//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for testing
//! purposes. These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::voice_state::create_test_voice_state;
//!
//! let state = create_test_voice_state(42, 7, Some(99));
//! assert_eq!(state.channel_id.map(|c| c.get()), Some(99));
//! ```
//!
//! # Available Factories
//!
//! - `voice_state::create_test_voice_state` - Create Serenity VoiceState objects

pub mod voice_state;

pub use voice_state::create_test_voice_state;
