//! Room channel name grammar.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Code used by the close command
pub const CLOSED_CODE: &str = "xxxxx";

#[allow(clippy::expect_used)]
static ROOM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*-)([0-9x]{5})(-[1-5f])?$").expect("room grammar compiles"));

/// Why a room edit was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// The current channel name is not a room name
    #[error("The channel name is invalid")]
    MalformedSource,

    /// The requested change would produce a name outside the grammar
    #[error("Invalid new channel name: {name}")]
    MalformedResult {
        /// The candidate that failed validation
        name: String,
    },
}

/// A channel name split into its room parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomName {
    /// Everything up to and including the dash before the code
    pub prefix: String,
    /// Five characters of `[0-9x]`
    pub code: String,
    /// Empty, or a dash followed by `1`..`5` or `f`
    pub suffix: String,
}

impl RoomName {
    /// Split `name` into prefix, code and suffix
    ///
    /// # Errors
    /// [`RoomError::MalformedSource`] if `name` does not match the grammar
    pub fn parse(name: &str) -> Result<Self, RoomError> {
        let caps = ROOM_NAME.captures(name).ok_or(RoomError::MalformedSource)?;
        let part = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Ok(Self {
            prefix: part(1),
            code: part(2),
            suffix: part(3),
        })
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.code, self.suffix)
    }
}

/// What to do with the player-count suffix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayersRequest {
    /// Leave the suffix as it is
    #[default]
    Keep,
    /// Replace the suffix with `-<value>`
    Set(String),
    /// Drop the suffix entirely
    Close,
}

impl PlayersRequest {
    /// Interpret raw user input; empty input keeps the current suffix
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            PlayersRequest::Keep
        } else {
            PlayersRequest::Set(input.to_string())
        }
    }
}

/// A requested change to a room name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomEdit {
    /// New code; `None` keeps the current one
    pub code: Option<String>,
    /// Suffix change
    pub players: PlayersRequest,
}

impl RoomEdit {
    /// Change only the code. Empty input keeps the current code.
    #[must_use]
    pub fn code(code: &str) -> Self {
        let code = code.trim();
        Self {
            code: (!code.is_empty()).then(|| code.to_string()),
            players: PlayersRequest::Keep,
        }
    }

    /// Change only the player suffix
    #[must_use]
    pub fn players(players: &str) -> Self {
        Self {
            code: None,
            players: PlayersRequest::from_input(players),
        }
    }

    /// Mark the room closed: placeholder code, no suffix
    #[must_use]
    pub fn close() -> Self {
        Self {
            code: Some(CLOSED_CODE.to_string()),
            players: PlayersRequest::Close,
        }
    }

    /// Recompose `current` with this edit applied.
    ///
    /// # Errors
    /// [`RoomError::MalformedSource`] if `current` is not a room name,
    /// [`RoomError::MalformedResult`] if the result would not be one
    pub fn apply_to(&self, current: &str) -> Result<RoomName, RoomError> {
        let source = RoomName::parse(current)?;

        let code = self.code.clone().unwrap_or(source.code);
        let suffix = match &self.players {
            PlayersRequest::Keep => source.suffix,
            PlayersRequest::Set(players) => format!("-{players}"),
            PlayersRequest::Close => String::new(),
        };
        let candidate = format!("{}{}{}", source.prefix, code, suffix);

        // The recomposed name must satisfy the same grammar as the source
        match RoomName::parse(&candidate) {
            Ok(name) => Ok(name),
            Err(_) => Err(RoomError::MalformedResult { name: candidate }),
        }
    }
}
