//! Voice channel occupancy read from the gateway cache.

use serenity::all::{Cache, ChannelId, GuildId, UserId, VoiceState};

/// Counts the non-bot users connected to `channel_id`.
///
/// # Arguments
/// - `voice_states` - Voice states of the guild
/// - `channel_id` - Channel to count
/// - `is_bot` - Whether a user is a bot account
///
/// # Returns
/// - `usize` - Number of human occupants
pub fn count_humans<'a>(
    voice_states: impl IntoIterator<Item = &'a VoiceState>,
    channel_id: ChannelId,
    is_bot: impl Fn(UserId) -> bool,
) -> usize {
    voice_states
        .into_iter()
        .filter(|state| state.channel_id == Some(channel_id))
        .filter(|state| !is_bot(state.user_id))
        .count()
}

/// Counts the human occupants of a channel from the gateway cache.
///
/// Bot status comes from the member payload of the voice state when present, otherwise from
/// the cached guild member or user. Users the cache knows nothing about count as humans, so
/// an incomplete cache delays an eviction rather than ending a session people are in.
///
/// # Returns
/// - `Some(usize)` - Number of human occupants
/// - `None` - The guild is not cached, so occupancy is unknown
pub fn count_humans_cached(
    cache: &Cache,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Option<usize> {
    let guild = cache.guild(guild_id)?;

    let count = count_humans(guild.voice_states.values(), channel_id, |user_id| {
        guild
            .voice_states
            .get(&user_id)
            .and_then(|state| state.member.as_ref())
            .map(|member| member.user.bot)
            .or_else(|| guild.members.get(&user_id).map(|member| member.user.bot))
            .or_else(|| cache.user(user_id).map(|user| user.bot))
            .unwrap_or(false)
    });

    Some(count)
}

/// Whether the user behind a voice state is a bot, as far as the payload and cache tell.
pub fn is_bot(cache: &Cache, voice_state: &VoiceState) -> bool {
    voice_state
        .member
        .as_ref()
        .map(|member| member.user.bot)
        .or_else(|| cache.user(voice_state.user_id).map(|user| user.bot))
        .unwrap_or(false)
}

/// The voice channel a user is connected to, if any.
pub fn voice_channel_of(cache: &Cache, guild_id: GuildId, user_id: UserId) -> Option<ChannelId> {
    cache
        .guild(guild_id)?
        .voice_states
        .get(&user_id)
        .and_then(|state| state.channel_id)
}

/// Display name of a guild channel, falling back to its mention when it is not cached.
pub fn channel_name(cache: &Cache, guild_id: GuildId, channel_id: ChannelId) -> String {
    cache
        .guild(guild_id)
        .and_then(|guild| guild.channels.get(&channel_id).map(|channel| channel.name.clone()))
        .unwrap_or_else(|| format!("<#{}>", channel_id))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_utils::serenity::create_test_voice_state;

    use super::*;

    const GUILD: u64 = 10;
    const CHANNEL: u64 = 20;
    const OTHER_CHANNEL: u64 = 21;
    const BOT: u64 = 1;

    /// Tests counting only humans in the requested channel.
    ///
    /// Expected: Two humans in the channel; bot and other-channel users ignored
    #[test]
    fn counts_humans_in_channel() {
        let states = vec![
            create_test_voice_state(BOT, GUILD, Some(CHANNEL)),
            create_test_voice_state(2, GUILD, Some(CHANNEL)),
            create_test_voice_state(3, GUILD, Some(CHANNEL)),
            create_test_voice_state(4, GUILD, Some(OTHER_CHANNEL)),
            create_test_voice_state(5, GUILD, None),
        ];
        let bots: HashSet<UserId> = [UserId::new(BOT)].into_iter().collect();

        let count = count_humans(&states, ChannelId::new(CHANNEL), |user| bots.contains(&user));

        assert_eq!(count, 2);
    }

    /// Tests a channel where only the bot remains.
    ///
    /// Expected: Zero humans
    #[test]
    fn only_bot_left_counts_zero() {
        let states = vec![create_test_voice_state(BOT, GUILD, Some(CHANNEL))];

        let count = count_humans(&states, ChannelId::new(CHANNEL), |user| {
            user == UserId::new(BOT)
        });

        assert_eq!(count, 0);
    }

    /// Tests counting in a guild the cache has not seen.
    ///
    /// Expected: None, so an idle check treats the channel as possibly occupied
    #[test]
    fn uncached_guild_is_unknown() {
        let cache = Cache::new();

        let count = count_humans_cached(&cache, GuildId::new(GUILD), ChannelId::new(CHANNEL));

        assert_eq!(count, None);
    }

    /// Tests bot detection for a user with no member payload and no cache entry.
    ///
    /// Expected: Treated as human
    #[test]
    fn unknown_user_is_not_a_bot() {
        let cache = Cache::new();
        let state = create_test_voice_state(2, GUILD, Some(CHANNEL));

        assert!(!is_bot(&cache, &state));
    }
}
