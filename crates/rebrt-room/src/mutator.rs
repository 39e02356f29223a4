//! Applying a room name to the remote channel.
//!
//! Discord lets a channel be renamed twice per ten minutes. Past that the
//! HTTP layer does not fail, it parks the request until the window reopens,
//! so a rename that has not finished within a couple of seconds is reported
//! as "quota reached" together with the name the user asked for.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::identifier::RoomName;

/// How long a rename may take before it is treated as rate limited
pub const DEFAULT_RENAME_TIMEOUT: Duration = Duration::from_secs(2);

/// Failures the remote platform can report for a rename
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// The bot is not allowed to manage this channel
    #[error("missing permission to rename the channel")]
    PermissionDenied,

    /// Anything else the platform or transport reported
    #[error("rename failed: {0}")]
    Remote(String),
}

/// The remote channel a room command runs in
pub trait ChannelHandle: Send + Sync {
    /// Current display name
    fn name(&self) -> &str;

    /// Ask the platform to rename the channel to `new_name`
    fn rename(&self, new_name: &str) -> impl Future<Output = Result<(), RenameError>> + Send;
}

/// What happened to a single rename attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Platform confirmed the rename
    Renamed {
        /// Name before the rename
        old: String,
        /// Name after the rename
        new: String,
    },
    /// No confirmation within the timeout; the rename quota is most likely spent
    RenameTimeout {
        /// The name that was requested
        target: String,
    },
    /// The bot lacks the rights to edit the channel
    PermissionDenied,
    /// Any other failure
    RemoteFailure(String),
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed { old, new } => {
                write!(f, "~~{old}~~ -> `{new}`\n*Goida!*")
            }
            RenameOutcome::RenameTimeout { target } => write!(
                f,
                "New room code: **{target}**\n\
                 *2 channel name edits per 10 minutes limit reached*"
            ),
            RenameOutcome::PermissionDenied => f.write_str("U menya net prav"),
            RenameOutcome::RemoteFailure(reason) => {
                write!(f, "Could not rename the channel: {reason}")
            }
        }
    }
}

/// Applies room names with a bounded wait. Never retries.
#[derive(Debug, Clone, Copy)]
pub struct RoomEditor {
    timeout: Duration,
}

impl RoomEditor {
    /// Create an editor that waits at most `timeout` for a rename
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Rename `channel` to `target`, once.
    ///
    /// On timeout the in-flight request is dropped; whether the platform
    /// applies it later is up to the platform.
    pub async fn apply<C: ChannelHandle>(&self, channel: &C, target: &RoomName) -> RenameOutcome {
        let old = channel.name().to_string();
        let new = target.to_string();

        match tokio::time::timeout(self.timeout, channel.rename(&new)).await {
            Ok(Ok(())) => {
                info!(%old, %new, "room renamed");
                RenameOutcome::Renamed { old, new }
            }
            Ok(Err(RenameError::PermissionDenied)) => {
                warn!(channel = %old, "no permission to rename room");
                RenameOutcome::PermissionDenied
            }
            Ok(Err(RenameError::Remote(reason))) => {
                warn!(channel = %old, %reason, "room rename failed");
                RenameOutcome::RemoteFailure(reason)
            }
            Err(_) => {
                info!(
                    channel = %old,
                    target = %new,
                    timeout = ?self.timeout,
                    "room rename not confirmed in time, assuming rate limit"
                );
                RenameOutcome::RenameTimeout { target: new }
            }
        }
    }
}

impl Default for RoomEditor {
    fn default() -> Self {
        Self::new(DEFAULT_RENAME_TIMEOUT)
    }
}
