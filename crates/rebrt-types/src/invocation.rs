use crate::Invoker;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Unique id of one command invocation, used to correlate log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvocationId(Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything a single command execution knows about where it came from.
///
/// Built fresh for each inbound interaction and dropped when the command
/// returns. Nothing here is shared between invocations.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub id: InvocationId,
    pub command: String,
    pub invoker: Invoker,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub received_at: DateTime<Utc>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, invoker: Invoker, channel_id: u64) -> Self {
        Self {
            id: InvocationId::new(),
            command: command.into(),
            invoker,
            channel_id,
            guild_id: None,
            received_at: Utc::now(),
        }
    }

    pub fn in_guild(mut self, guild_id: Option<u64>) -> Self {
        self.guild_id = guild_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocations_get_distinct_ids() {
        let a = Invocation::new("rm_code", Invoker::new(1, "a"), 10);
        let b = Invocation::new("rm_code", Invoker::new(1, "a"), 10);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_in_guild() {
        let inv = Invocation::new("leaderboard", Invoker::new(1, "a"), 10).in_guild(Some(42));
        assert_eq!(inv.guild_id, Some(42));
        assert_eq!(inv.command, "leaderboard");
    }
}
