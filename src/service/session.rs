//! Per-guild watch session slot with idle eviction.
//!
//! This module provides the `SessionTracker`, which records for every guild whether a watch
//! session is running and which voice connection serves it. A guild has at most one session.
//! Sessions end through `/stop`, through the end of relayed playback, or through idle eviction
//! once the voice channel has had no human members for the configured delay.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::session::SessionError,
    model::session::{GuildSession, IdleOutcome, SessionToken},
};

/// Service tracking the active watch session of every guild.
///
/// Generic over the connection handle `H` so the slot logic carries no voice library types.
/// Clones share the same table. Every check-and-modify operation takes the write lock once, so
/// concurrent commands and timers see a consistent slot.
#[derive(Clone)]
pub struct SessionTracker<H> {
    /// Active sessions keyed by guild ID.
    sessions: Arc<RwLock<HashMap<u64, GuildSession<H>>>>,
    /// Source of session tokens; shared by all clones so tokens stay unique.
    next_token: Arc<AtomicU64>,
}

impl<H: Clone> SessionTracker<H> {
    /// Creates a new tracker with no active sessions.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            next_token: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Starts a session for the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the session belongs to
    /// - `handle` - Voice connection serving the session
    ///
    /// # Returns
    /// - `Ok(SessionToken)` - Token identifying the new session
    /// - `Err(SessionError::AlreadyActive)` - The guild already has a session; nothing changed
    pub async fn start(&self, guild_id: u64, handle: H) -> Result<SessionToken, SessionError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&guild_id) {
            return Err(SessionError::AlreadyActive { guild_id });
        }

        let token = SessionToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        sessions.insert(
            guild_id,
            GuildSession {
                token,
                handle,
                started_at: Utc::now(),
            },
        );

        Ok(token)
    }

    /// Stops the guild's session.
    ///
    /// # Returns
    /// - `Ok(H)` - The removed connection handle, for the caller to release
    /// - `Err(SessionError::NotActive)` - There was no session to stop
    pub async fn stop(&self, guild_id: u64) -> Result<H, SessionError> {
        self.sessions
            .write()
            .await
            .remove(&guild_id)
            .map(|session| session.handle)
            .ok_or(SessionError::NotActive { guild_id })
    }

    /// Ends a specific session if it is still the guild's current one.
    ///
    /// Used by cleanup paths that can race with `/stop` or with a newer session, such as the
    /// end of relayed playback. Calling it again, or after the slot was reused, is a no-op.
    ///
    /// # Returns
    /// - `Some(H)` - The session was current and has been removed
    /// - `None` - The slot is empty or holds a different session
    pub async fn release(&self, guild_id: u64, token: SessionToken) -> Option<H> {
        let mut sessions = self.sessions.write().await;

        match sessions.get(&guild_id) {
            Some(session) if session.token == token => {
                sessions.remove(&guild_id).map(|session| session.handle)
            }
            _ => None,
        }
    }

    /// Replaces the handle of a specific session, for example after the bot was moved to
    /// another channel.
    ///
    /// # Returns
    /// - `true` - The session was current and now uses `handle`
    /// - `false` - The slot is empty or holds a different session
    pub async fn relocate(&self, guild_id: u64, token: SessionToken, handle: H) -> bool {
        match self.sessions.write().await.get_mut(&guild_id) {
            Some(session) if session.token == token => {
                session.handle = handle;
                true
            }
            _ => false,
        }
    }

    /// Re-evaluates a pending idle eviction.
    ///
    /// Meant to run once the idle delay has elapsed. `human_count` is called now, not when the
    /// check was scheduled, and receives the session's current handle, so a member rejoining
    /// during the delay keeps the session alive and a session that moved channels is counted
    /// where it is now. The session is evicted only if the count is known to be zero and the
    /// guild's slot still holds the session identified by `token`; a timer scheduled for an
    /// earlier session never ends a newer one.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the check was scheduled for
    /// - `token` - Session that was current when the check was scheduled
    /// - `human_count` - Live count of non-bot members in the session's channel, or `None`
    ///   when it cannot be determined
    ///
    /// # Returns
    /// - `IdleOutcome::Evict(H)` - Session removed; the caller disconnects the handle
    /// - `IdleOutcome::NoOp` - Nothing changed
    pub async fn idle_check(
        &self,
        guild_id: u64,
        token: SessionToken,
        human_count: impl FnOnce(&H) -> Option<usize>,
    ) -> IdleOutcome<H> {
        let mut sessions = self.sessions.write().await;

        let Some(session) = sessions
            .get(&guild_id)
            .filter(|session| session.token == token)
        else {
            return IdleOutcome::NoOp;
        };
        if human_count(&session.handle) != Some(0) {
            return IdleOutcome::NoOp;
        }

        match sessions.remove(&guild_id) {
            Some(session) => IdleOutcome::Evict(session.handle),
            None => IdleOutcome::NoOp,
        }
    }

    /// Returns the token and handle of the guild's current session.
    pub async fn current(&self, guild_id: u64) -> Option<(SessionToken, H)> {
        self.sessions
            .read()
            .await
            .get(&guild_id)
            .map(|session| (session.token, session.handle.clone()))
    }

    pub async fn is_active(&self, guild_id: u64) -> bool {
        self.sessions.read().await.contains_key(&guild_id)
    }

    /// When the guild's current session started.
    pub async fn started_at(&self, guild_id: u64) -> Option<DateTime<Utc>> {
        self.sessions
            .read()
            .await
            .get(&guild_id)
            .map(|session| session.started_at)
    }
}

impl<H: Clone> Default for SessionTracker<H> {
    fn default() -> Self {
        Self::new()
    }
}
