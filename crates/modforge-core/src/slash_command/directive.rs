//! Free-form command sources mapped onto the [`Command`] set.
//!
//! Issues can carry a `/command <free text>` directive instead of slash
//! commands, and when nothing deterministic matches, an external model may be
//! asked to interpret the text as `{action, target, details}` JSON. Both end
//! up here and are converted into the same variants `detect` produces.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use super::grammar::parse_indices;
use super::model::{Command, CommandKind, Selection};
use crate::error::Result;
use crate::fence::strip_code_fence;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)/command\s+(.*)"))
}

fn regex_fix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)^fix\s+(?:error|bug|issue)?\s*in\s+(.+)"))
}

fn regex_add() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)^add\s+(?:feature|functionality|support)\s+(?:"([^"]+)"|([^"\s]+))\s+to\s+(.+)"#)
    })
}

fn regex_improve() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)^improve\s+(.+)"))
}

fn regex_document() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)^document\s+(.+)"))
}

/// Returns the text following the first `/command` keyword, trimmed.
///
/// `None` when there is no directive or it is empty.
pub fn extract_directive(text: &str) -> Option<String> {
    let caps = regex_directive().captures(text)?;
    let directive = caps.get(1)?.as_str().trim();
    if directive.is_empty() {
        None
    } else {
        Some(directive.to_string())
    }
}

/// Interprets a directive such as `fix error in GenerateCodeAction.java`.
///
/// Recognized shapes:
/// - `fix [error|bug|issue] in <target>`
/// - `add (feature|functionality|support) <feature> to <target>`
/// - `improve <target>`
/// - `document <target>`
///
/// Anything else returns `None`; the caller decides whether to consult a
/// model interpreter.
pub fn interpret_directive(directive: &str) -> Option<Command> {
    let directive = directive.trim();

    if let Some(caps) = regex_fix().captures(directive) {
        return non_empty(&caps[1]).map(|target| Command::Fix { target });
    }
    if let Some(caps) = regex_add().captures(directive) {
        let feature = caps.get(1).or_else(|| caps.get(2))?.as_str().to_string();
        let target = non_empty(&caps[3])?;
        return Some(Command::Add { feature, target });
    }
    if let Some(caps) = regex_improve().captures(directive) {
        return non_empty(&caps[1]).map(|target| Command::Improve { target });
    }
    if let Some(caps) = regex_document().captures(directive) {
        return non_empty(&caps[1]).map(|target| Command::Document { target });
    }

    tracing::debug!(directive, "Directive did not match a known shape");
    None
}

/// An `{action, target, details}` object produced by a model interpreter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelIntent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    /// Free-form; models return a string most of the time but sometimes an object
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ModelIntent {
    /// Parses a model reply, tolerating a surrounding ```json fence.
    pub fn from_reply(reply: &str) -> Result<Self> {
        let body = strip_code_fence(reply, "json").trim();
        Ok(serde_json::from_str(body)?)
    }

    /// `details` as text, if it is a non-empty string.
    pub fn details_text(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Maps this intent onto a [`Command`].
    ///
    /// Unknown actions and intents missing a required argument yield `None`.
    pub fn into_command(self) -> Option<Command> {
        let kind: CommandKind = self.action.as_deref()?.parse().ok()?;
        let target = self.target.as_deref().and_then(non_empty);

        match kind {
            CommandKind::Help => Some(Command::Help),
            CommandKind::Add => {
                let feature = self.details_text()?.to_string();
                Some(Command::Add {
                    feature,
                    target: target?,
                })
            }
            CommandKind::Implement => {
                let selection = target
                    .as_deref()
                    .and_then(selection_from)
                    .or_else(|| self.details_text().and_then(selection_from))?;
                Some(Command::Implement { selection })
            }
            single => Command::with_target(single, target?),
        }
    }
}

fn selection_from(text: &str) -> Option<Selection> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("all") {
        return Some(Selection::All);
    }
    let indices = parse_indices(text);
    if indices.is_empty() {
        None
    } else {
        Some(Selection::Indices(indices))
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
