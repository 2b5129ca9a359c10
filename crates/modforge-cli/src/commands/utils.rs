use anyhow::{Context, Result};
use modforge_core::config::{AutomationConfig, EventContext, EventKind};
use modforge_core::slash_command::{Command, detect, extract_directive, interpret_directive};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the text to scan.
///
/// Precedence:
/// 1. `--text`
/// 2. `--file`
/// 3. The event body from the environment
pub fn resolve_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let config = AutomationConfig::from_env().context("Failed to load event context")?;
    Ok(config.event.body)
}

/// Commands to run for an event.
///
/// Slash commands win; issues without any fall back to a `/command`
/// directive.
pub fn collect_commands(event: &EventContext) -> Vec<Command> {
    let commands = detect(&event.body);
    if !commands.is_empty() || event.kind != EventKind::Issue {
        return commands;
    }

    match extract_directive(&event.body) {
        Some(directive) => {
            tracing::info!(directive = %directive, "Interpreting /command directive");
            interpret_directive(&directive).into_iter().collect()
        }
        None => Vec::new(),
    }
}

/// Usage hint for issues that name no `/command` directive.
pub const NO_COMMAND_REPLY: &str =
    "No command found. Please use the format `/command [action] [target] [parameters]`.";

/// Reply for an issue event that yielded no commands.
///
/// A directive that names no known action is quoted back to the requester.
pub fn issue_guidance(body: &str) -> String {
    match extract_directive(body) {
        Some(directive) => format!(
            "Unrecognized directive: `/command {}`. Supported actions are: fix, add, improve, document.",
            directive
        ),
        None => NO_COMMAND_REPLY.to_string(),
    }
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn event(kind: EventKind, body: &str) -> EventContext {
        EventContext {
            kind,
            body: body.to_string(),
            issue_number: 1,
            issue_title: String::new(),
            comment_id: 0,
            is_pr: false,
            pr_number: 0,
        }
    }

    #[test]
    fn test_resolve_input_prefers_text() {
        let input = resolve_input(Some("/help".to_string()), None).unwrap();
        assert_eq!(input, "/help");
    }

    #[test]
    fn test_resolve_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("comment.md");
        fs::write(&path, "/fix A.java").unwrap();

        let input = resolve_input(None, Some(path)).unwrap();
        assert_eq!(input, "/fix A.java");
    }

    #[test]
    fn test_resolve_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_input(None, Some(temp_dir.path().join("nope.md"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_collect_commands_slash_first() {
        let commands = collect_commands(&event(
            EventKind::Issue,
            "/command improve A.java\n/document B.java",
        ));
        assert_eq!(
            commands,
            vec![Command::Document {
                target: "B.java".to_string()
            }]
        );
    }

    #[test]
    fn test_collect_commands_directive_for_issues_only() {
        let body = "/command fix bug in GenerateCodeAction.java";
        assert_eq!(
            collect_commands(&event(EventKind::Issue, body)),
            vec![Command::Fix {
                target: "GenerateCodeAction.java".to_string()
            }]
        );
        assert!(collect_commands(&event(EventKind::Comment, body)).is_empty());
    }

    #[test]
    fn test_issue_guidance_without_directive() {
        assert_eq!(
            issue_guidance("Please fix the crash in GenerateCodeAction"),
            NO_COMMAND_REPLY
        );
    }

    #[test]
    fn test_issue_guidance_quotes_directive() {
        let reply = issue_guidance("/command make the settings panel faster");
        assert!(reply.starts_with("Unrecognized directive"));
        assert!(reply.contains("`/command make the settings panel faster`"));
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("reply.md");
        write_file(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }
}
