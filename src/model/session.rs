//! Per-guild watch session records.

use chrono::{DateTime, Utc};

/// Identifies one particular session.
///
/// Tokens are handed out in increasing order by the session tracker and never reused, so a
/// timer or playback callback holding a token can tell whether the session it was created for
/// is still the one occupying the guild's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(pub u64);

/// An active watch session in one guild.
///
/// `H` is the voice connection handle. The tracker keeps a reference to the connection; the
/// voice library owns it.
#[derive(Debug, Clone)]
pub struct GuildSession<H> {
    pub token: SessionToken,
    pub handle: H,
    pub started_at: DateTime<Utc>,
}

/// Result of an idle check.
#[derive(Debug, PartialEq, Eq)]
pub enum IdleOutcome<H> {
    /// The channel was still empty and the session was removed; release the handle.
    Evict(H),
    /// Someone rejoined, or the session ended or was replaced in the meantime.
    NoOp,
}
