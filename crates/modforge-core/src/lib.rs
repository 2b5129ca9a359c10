//! Core of the ModForge automation: slash-command grammar and dispatch.
//!
//! CI hands over an issue or comment body; [`slash_command::detect`] turns it
//! into an ordered list of [`slash_command::Command`] values, and a
//! [`dispatch::Dispatcher`] runs them against the registered handlers and
//! produces the markdown response.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fence;
pub mod slash_command;

// Re-export common error type
pub use error::{ModforgeError, Result};
