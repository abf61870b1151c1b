//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState.
///
/// Creates a VoiceState by deserializing JSON with the provided values. The member payload is
/// left out, as it is for voice states delivered inside a guild create event. All flags are
/// cleared.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `guild_id` - Discord guild ID (snowflake)
/// - `channel_id` - Voice channel the user is in, or `None` when they just left
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(user_id: u64, guild_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "channel_id": channel_id.map(|id| id.to_string()),
        "deaf": false,
        "guild_id": guild_id.to_string(),
        "member": null,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "session_id": format!("session-{}", user_id),
        "suppress": false,
        "user_id": user_id.to_string(),
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
