//! Slash command domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which suggestions an `/implement` command refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Every suggestion (`/implement all`)
    All,
    /// Specific numbered suggestions, in the order they were written
    Indices(Vec<u32>),
}

/// A slash command recognized in an issue, pull request, or comment body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    Fix { target: String },
    Improve { target: String },
    Document { target: String },
    Add { feature: String, target: String },
    Explain { target: String },
    Implement { selection: Selection },
    Analyze { target: String },
    Refactor { target: String },
    Test { target: String },
    Help,
}

/// The kind of a [`Command`], without its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Fix,
    Improve,
    Document,
    Add,
    Explain,
    Implement,
    Analyze,
    Refactor,
    Test,
    Help,
}

impl CommandKind {
    /// All kinds, in catalogue order.
    pub const ALL: [CommandKind; 10] = [
        CommandKind::Fix,
        CommandKind::Improve,
        CommandKind::Document,
        CommandKind::Add,
        CommandKind::Explain,
        CommandKind::Implement,
        CommandKind::Analyze,
        CommandKind::Refactor,
        CommandKind::Test,
        CommandKind::Help,
    ];

    /// The keyword typed after the slash (lowercase).
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Fix => "fix",
            CommandKind::Improve => "improve",
            CommandKind::Document => "document",
            CommandKind::Add => "add",
            CommandKind::Explain => "explain",
            CommandKind::Implement => "implement",
            CommandKind::Analyze => "analyze",
            CommandKind::Refactor => "refactor",
            CommandKind::Test => "test",
            CommandKind::Help => "help",
        }
    }

    /// Whether this kind takes a single `target` argument.
    pub fn takes_single_target(self) -> bool {
        !matches!(
            self,
            CommandKind::Add | CommandKind::Implement | CommandKind::Help
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/');
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

impl Command {
    /// Builds a single-target command of the given kind.
    ///
    /// Returns `None` for kinds that do not take exactly one target
    /// (`add`, `implement`, `help`).
    pub fn with_target(kind: CommandKind, target: impl Into<String>) -> Option<Self> {
        let target = target.into();
        let command = match kind {
            CommandKind::Fix => Command::Fix { target },
            CommandKind::Improve => Command::Improve { target },
            CommandKind::Document => Command::Document { target },
            CommandKind::Explain => Command::Explain { target },
            CommandKind::Analyze => Command::Analyze { target },
            CommandKind::Refactor => Command::Refactor { target },
            CommandKind::Test => Command::Test { target },
            CommandKind::Add | CommandKind::Implement | CommandKind::Help => return None,
        };
        Some(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Fix { .. } => CommandKind::Fix,
            Command::Improve { .. } => CommandKind::Improve,
            Command::Document { .. } => CommandKind::Document,
            Command::Add { .. } => CommandKind::Add,
            Command::Explain { .. } => CommandKind::Explain,
            Command::Implement { .. } => CommandKind::Implement,
            Command::Analyze { .. } => CommandKind::Analyze,
            Command::Refactor { .. } => CommandKind::Refactor,
            Command::Test { .. } => CommandKind::Test,
            Command::Help => CommandKind::Help,
        }
    }

    /// The file, class, or component this command operates on.
    ///
    /// `None` for `implement` and `help`, which have no target.
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::Fix { target }
            | Command::Improve { target }
            | Command::Document { target }
            | Command::Add { target, .. }
            | Command::Explain { target }
            | Command::Analyze { target }
            | Command::Refactor { target }
            | Command::Test { target } => Some(target),
            Command::Implement { .. } | Command::Help => None,
        }
    }

    /// Renders the canonical slash form of this command.
    ///
    /// Arguments that are empty or contain whitespace are double-quoted, so
    /// the grammar reads the rendered text back into the same command. That
    /// holds only for arguments without a `"`, which are the only ones
    /// `detect` produces; there is no escape syntax for an inner quote.
    pub fn to_slash(&self) -> String {
        let keyword = self.kind().keyword();
        match self {
            Command::Add { feature, target } => {
                format!("/{} {} to {}", keyword, quote(feature), quote(target))
            }
            Command::Implement { selection } => match selection {
                Selection::All => format!("/{} all", keyword),
                Selection::Indices(indices) => {
                    let list = indices
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("/{} {}", keyword, list)
                }
            },
            Command::Help => format!("/{}", keyword),
            other => match other.target() {
                Some(target) => format!("/{} {}", keyword, quote(target)),
                None => format!("/{}", keyword),
            },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_slash())
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}
