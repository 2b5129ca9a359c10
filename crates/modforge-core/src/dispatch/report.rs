//! Markdown response posted back to the issue or pull request.

use serde::Serialize;

use crate::slash_command::Command;

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub command: Command,
    pub message: String,
    pub succeeded: bool,
}

impl CommandOutcome {
    pub fn new(command: Command, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
            succeeded: true,
        }
    }

    pub fn failed(command: Command, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
            succeeded: false,
        }
    }
}

/// Everything a dispatch run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub outcomes: Vec<CommandOutcome>,
    pub changes: Vec<String>,
}

impl DispatchReport {
    pub fn push(&mut self, outcome: CommandOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Whether any handler reported an error.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.succeeded)
    }

    /// Renders the response comment.
    pub fn render_markdown(&self) -> String {
        let mut lines: Vec<String> =
            vec!["## ModForge Automation Response".to_string(), String::new()];

        for outcome in &self.outcomes {
            lines.push(format!("### Command: `{}`", outcome.command.to_slash()));
            lines.push(String::new());
            lines.push(outcome.message.clone());
            lines.push(String::new());
        }

        if !self.changes.is_empty() {
            lines.push("### Changes Made".to_string());
            lines.push(String::new());
            for change in &self.changes {
                lines.push(format!("- ✅ {}", change));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push("*Executed by ModForge Automation System*".to_string());
        lines.join("\n")
    }
}
