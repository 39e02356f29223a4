//! `ReBRT` fetch leaves
//!
//! Plain HTTP GET and JSON decoding shared by every command that talks to an
//! upstream service.
//!
//! - [`HttpFetcher`] issues an unauthenticated GET with a browser `User-Agent`
//!   and returns the body as text
//! - [`envelope`] turns that text into typed JSON
//! - [`Fetch`] is the seam callers depend on, so tests can swap in canned bodies

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{Fetch, HttpFetcher, USER_AGENT};
pub use envelope::read_json;
pub use error::FetchError;
