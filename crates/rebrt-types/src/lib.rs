//! ReBRT Types - Core types shared by the ReBRT bot crates
//!
//! This module defines the per-invocation context and the selector types
//! the leaderboard commands accept.

pub mod invocation;
pub mod ranking;
pub mod user;

pub use invocation::{Invocation, InvocationId};
pub use ranking::{EventKind, Page, RankEntry, Region};
pub use user::Invoker;

/// Hard limit of a single Discord message, in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;
