//! Slash command detection.
//!
//! Every command kind has its own matcher that is run over the whole input.
//! Matches are collected together with their start offsets and then ordered
//! by offset, so the result follows the order in which commands were written
//! regardless of kind.
//!
//! Only the keyword is matched case-insensitively. Arguments keep their
//! original case and are either a double-quoted string (taken verbatim, no
//! escapes) or the run of non-whitespace characters after the keyword. The
//! slash is not anchored to a word boundary, so `x/fix foo` still matches.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::model::{Command, CommandKind, Selection};

/// `"quoted"` or `bare` argument; group 1 is the quoted body, group 2 the bare token.
const ARG: &str = r#"(?:"([^"]*)"|([^\s"]+))"#;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn single_target_patterns() -> &'static [(CommandKind, Regex)] {
    static RE: OnceLock<Vec<(CommandKind, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        CommandKind::ALL
            .into_iter()
            .filter(|kind| kind.takes_single_target())
            .map(|kind| (kind, regex(&format!(r"(?i:/{})\s+{}", kind.keyword(), ARG))))
            .collect()
    })
}

fn regex_add() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(&format!(r"(?i:/add)\s+{}\s+to\s+{}", ARG, ARG)))
}

fn regex_implement() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i:/implement)\s+(?:(all)|([0-9,\s]+))"))
}

fn regex_help() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i:/help)"))
}

/// Detects every slash command in `text`, in order of appearance.
///
/// Never fails: command-like text that does not fit the grammar (for example
/// `/fix` with no target, or `/implement banana`) is simply skipped.
///
/// # Examples
///
/// ```
/// use modforge_core::slash_command::{Command, detect};
///
/// let commands = detect("/fix a.java and also /document b.java");
/// assert_eq!(
///     commands,
///     vec![
///         Command::Fix { target: "a.java".to_string() },
///         Command::Document { target: "b.java".to_string() },
///     ]
/// );
/// ```
pub fn detect(text: &str) -> Vec<Command> {
    if !text.contains('/') {
        return Vec::new();
    }

    let mut found: Vec<(usize, Command)> = Vec::new();

    for (kind, re) in single_target_patterns() {
        for caps in re.captures_iter(text) {
            let target = argument(&caps, 1, 2);
            if let Some(command) = Command::with_target(*kind, target) {
                found.push((match_start(&caps), command));
            }
        }
    }

    for caps in regex_add().captures_iter(text) {
        let command = Command::Add {
            feature: argument(&caps, 1, 2),
            target: argument(&caps, 3, 4),
        };
        found.push((match_start(&caps), command));
    }

    for caps in regex_implement().captures_iter(text) {
        let selection = if caps.get(1).is_some() {
            Selection::All
        } else {
            let indices = caps
                .get(2)
                .map(|m| parse_indices(m.as_str()))
                .unwrap_or_default();
            if indices.is_empty() {
                continue;
            }
            Selection::Indices(indices)
        };
        found.push((match_start(&caps), Command::Implement { selection }));
    }

    for m in regex_help().find_iter(text) {
        found.push((m.start(), Command::Help));
    }

    // Stable: equal offsets cannot occur across kinds, but keep insertion order anyway.
    found.sort_by_key(|(start, _)| *start);

    tracing::debug!(count = found.len(), "Detected slash commands");

    found.into_iter().map(|(_, command)| command).collect()
}

/// Parses a comma-separated list of suggestion numbers.
///
/// Entries are trimmed; anything that is not a plain positive integer is
/// dropped silently.
pub fn parse_indices(list: &str) -> Vec<u32> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && entry.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|entry| entry.parse::<u32>().ok())
        .filter(|index| *index > 0)
        .collect()
}

fn match_start(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.start())
}

/// Prefers the quoted group (which may be empty) over the bare one.
fn argument(caps: &Captures<'_>, quoted: usize, bare: usize) -> String {
    caps.get(quoted)
        .or_else(|| caps.get(bare))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
