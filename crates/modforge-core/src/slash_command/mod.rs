//! Slash commands embedded in issue, pull request, and comment bodies.
//!
//! This module provides the command model, the grammar that finds commands
//! in free-form text, the static builtin catalogue used for `/help`, and the
//! mapping of free-form directives and model intents onto the same model.

pub mod builtin;
pub mod directive;
pub mod grammar;
pub mod model;

pub use builtin::{
    BuiltinSlashCommand, HelpSection, builtin_commands, find_builtin_command, render_help,
};
pub use directive::{ModelIntent, extract_directive, interpret_directive};
pub use grammar::{detect, parse_indices};
pub use model::{Command, CommandKind, Selection};
