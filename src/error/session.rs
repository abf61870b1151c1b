use thiserror::Error;

/// Misuse of the per-guild session slot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A session is already running in this guild.
    #[error("A watch party is already active in guild {guild_id}")]
    AlreadyActive { guild_id: u64 },

    /// There is no session to stop in this guild.
    #[error("No watch party is active in guild {guild_id}")]
    NotActive { guild_id: u64 },
}
