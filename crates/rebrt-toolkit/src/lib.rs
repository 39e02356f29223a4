//! Self-contained commands: conversions, dice, and link builders.
//!
//! Nothing in here does I/O; every function takes its inputs (and RNG) and
//! returns the reply text or a [`ToolError`].

pub mod color;
pub mod links;
pub mod luck;
pub mod text;
pub mod time;

pub use color::{hex_to_rgb, rgb_to_hex};
pub use links::{google_search_url, qr_code_url};
pub use luck::{coin, isv, pick, random_between};
pub use text::{length, repeat};
pub use time::{convert_timezone, discord_timestamp, TimestampStyle};

use thiserror::Error;

/// Invalid user input for one of the toolkit commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Invalid rgb color")]
    InvalidRgb,
    #[error("Invalid hex color")]
    InvalidHex,
    #[error("Invalid date")]
    InvalidDate,
    #[error("Invalid range: {start} is greater than {stop}")]
    InvalidRange { start: i64, stop: i64 },
    #[error("too many repeats")]
    TooManyRepeats,
}
