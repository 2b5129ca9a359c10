//! Builtin slash commands recognized in issue and pull request comments.
//!
//! The catalogue is static: it is built once on first access and backs the
//! `/help` reply.

use serde::Serialize;
use std::sync::OnceLock;

use super::model::CommandKind;

/// Which part of the help reply a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpSection {
    /// Commands that change code
    CodeManipulation,
    /// Commands that only report back
    Information,
}

impl HelpSection {
    pub fn title(self) -> &'static str {
        match self {
            HelpSection::CodeManipulation => "Code Manipulation",
            HelpSection::Information => "Information",
        }
    }
}

/// A builtin slash command.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinSlashCommand {
    pub kind: CommandKind,
    /// Usage format (e.g., "/fix [target]")
    pub usage: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// One concrete invocation
    pub example: &'static str,
    pub section: HelpSection,
}

impl BuiltinSlashCommand {
    /// Creates a new builtin slash command.
    pub const fn new(
        kind: CommandKind,
        usage: &'static str,
        description: &'static str,
        example: &'static str,
        section: HelpSection,
    ) -> Self {
        Self {
            kind,
            usage,
            description,
            example,
            section,
        }
    }

    /// Command name (without the leading /)
    pub fn name(&self) -> &'static str {
        self.kind.keyword()
    }
}

/// Static storage for builtin commands (initialized once).
static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinSlashCommand>> = OnceLock::new();

/// Returns a reference to all builtin slash commands, in help order.
pub fn builtin_commands() -> &'static [BuiltinSlashCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        use CommandKind::*;
        use HelpSection::*;
        vec![
            BuiltinSlashCommand::new(
                Fix,
                "/fix [target]",
                "Fix issues in the specified file or component",
                "/fix GenerateCodeAction.java",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Improve,
                "/improve [target]",
                "Improve code quality in the specified file",
                "/improve com.modforge.intellij.plugin.ui.toolwindow.AIAssistPanel",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Document,
                "/document [target]",
                "Generate documentation for the specified file",
                "/document SettingsPanel.java",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Add,
                "/add [feature] to [target]",
                "Add a feature to the specified component",
                "/add \"dark mode toggle\" to MetricsPanel.java",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Refactor,
                "/refactor [target]",
                "Refactor the specified file without changing its behavior",
                "/refactor ModForgeToolWindowPanel.java",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Test,
                "/test [target]",
                "Generate tests for the specified file",
                "/test ModLoaderDetector.java",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Implement,
                "/implement all | /implement [n, m, ...]",
                "Implement all or the numbered suggestions from a previous analysis",
                "/implement 1, 3",
                CodeManipulation,
            ),
            BuiltinSlashCommand::new(
                Explain,
                "/explain [target]",
                "Explain how the specified code works",
                "/explain ContinuousDevelopmentService.java",
                Information,
            ),
            BuiltinSlashCommand::new(
                Analyze,
                "/analyze [target]",
                "Analyze the specified file and suggest numbered improvements",
                "/analyze PatternRecognitionService.java",
                Information,
            ),
            BuiltinSlashCommand::new(
                Help,
                "/help",
                "Show this help message",
                "/help",
                Information,
            ),
        ]
    })
}

/// Find a builtin command by name (with or without the leading slash).
pub fn find_builtin_command(name: &str) -> Option<&'static BuiltinSlashCommand> {
    let kind: CommandKind = name.parse().ok()?;
    builtin_commands().iter().find(|cmd| cmd.kind == kind)
}

/// Renders the static markdown reply for `/help`.
pub fn render_help() -> String {
    let mut out = String::from("## Available Commands\n\n");
    out.push_str(
        "Use these commands in comments to interact with the autonomous development system:\n",
    );

    for section in [HelpSection::CodeManipulation, HelpSection::Information] {
        out.push_str(&format!("\n### {}\n", section.title()));
        for cmd in builtin_commands().iter().filter(|c| c.section == section) {
            out.push_str(&format!("- `{}` - {}\n", cmd.usage, cmd.description));
        }
    }

    out.push_str("\n### Examples\n");
    for cmd in builtin_commands() {
        out.push_str(&format!("- `{}`\n", cmd.example));
    }

    out.push_str(
        "\nThe system will process your command and respond with the results in a comment.\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slash_command::detect;

    #[test]
    fn test_builtin_commands_cover_every_kind() {
        let commands = builtin_commands();
        assert_eq!(commands.len(), CommandKind::ALL.len());
        for kind in CommandKind::ALL {
            assert!(commands.iter().any(|c| c.kind == kind), "missing {kind}");
        }
    }

    #[test]
    fn test_find_builtin_command() {
        assert!(find_builtin_command("help").is_some());
        assert_eq!(find_builtin_command("/add").map(|c| c.name()), Some("add"));
        assert!(find_builtin_command("nonexistent").is_none());
    }

    #[test]
    fn test_examples_are_recognized() {
        for cmd in builtin_commands() {
            let detected = detect(cmd.example);
            assert_eq!(detected.len(), 1, "example {:?}", cmd.example);
            assert_eq!(detected[0].kind(), cmd.kind);
        }
    }

    #[test]
    fn test_render_help_lists_everything() {
        let help = render_help();
        assert!(help.starts_with("## Available Commands"));
        assert!(help.contains("### Code Manipulation"));
        assert!(help.contains("### Information"));
        for cmd in builtin_commands() {
            assert!(help.contains(cmd.usage));
            assert!(help.contains(cmd.example));
        }
    }
}
