//! `ReBRT` room-code editing
//!
//! Room channels are named `<anything>-<code>[-<players>]`, for example
//! `room-12345-3`. The code is five digits or `x` placeholders (`xxxxx` means
//! the room is closed) and the optional suffix is a player count `1`..`5` or
//! `f` for full.
//!
//! [`identifier`] parses and recomposes such names without side effects.
//! [`mutator`] pushes a validated name to Discord, where renames are limited
//! to two per channel per ten minutes.

#![deny(unsafe_code, unused_imports, missing_docs)]

pub mod identifier;
pub mod mutator;

pub use identifier::{PlayersRequest, RoomEdit, RoomError, RoomName, CLOSED_CODE};
pub use mutator::{ChannelHandle, RenameError, RenameOutcome, RoomEditor, DEFAULT_RENAME_TIMEOUT};

use tracing::info;

/// Result of one room command, ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomReply {
    /// The edit was rejected before touching Discord
    Rejected(RoomError),
    /// The rename was attempted
    Attempted(RenameOutcome),
}

impl std::fmt::Display for RoomReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomReply::Rejected(err) => err.fmt(f),
            RoomReply::Attempted(outcome) => outcome.fmt(f),
        }
    }
}

/// Compute the new name for `channel` and try to apply it.
///
/// Grammar violations are returned without any remote call.
pub async fn edit_room<C: ChannelHandle>(
    editor: &RoomEditor,
    channel: &C,
    edit: &RoomEdit,
) -> RoomReply {
    let target = match edit.apply_to(channel.name()) {
        Ok(target) => target,
        Err(err) => {
            info!(channel = channel.name(), error = %err, "room edit rejected");
            return RoomReply::Rejected(err);
        }
    };

    RoomReply::Attempted(editor.apply(channel, &target).await)
}
