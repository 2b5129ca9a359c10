//! Event context handed over by CI.
//!
//! The workflow exports the triggering issue / comment into environment
//! variables before invoking the automation. Comment events carry
//! `COMMENT_BODY`; issue events carry `ISSUE_BODY`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ModforgeError, Result};

/// Default response file for comment events.
pub const COMMENT_RESPONSE_FILE: &str = "comment_response.txt";
/// Default response file for issue events.
pub const ISSUE_RESPONSE_FILE: &str = "issue_response.txt";

/// What triggered the run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A comment on an issue or pull request
    Comment,
    /// An opened or edited issue
    Issue,
}

/// The issue, pull request, or comment being processed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub kind: EventKind,
    /// Text scanned for commands
    pub body: String,
    pub issue_number: u64,
    #[serde(default)]
    pub issue_title: String,
    #[serde(default)]
    pub comment_id: u64,
    #[serde(default)]
    pub is_pr: bool,
    #[serde(default)]
    pub pr_number: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AutomationConfig {
    pub event: EventContext,
    /// Where the markdown response is written for the workflow to post
    pub response_file: PathBuf,
}

impl AutomationConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of
    /// an environment variable if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let comment_body = lookup("COMMENT_BODY").filter(|body| !body.trim().is_empty());

        let (kind, body) = match comment_body {
            Some(body) => (EventKind::Comment, body),
            None => (EventKind::Issue, lookup("ISSUE_BODY").unwrap_or_default()),
        };

        let event = EventContext {
            kind,
            body,
            issue_number: parse_number(&lookup, "ISSUE_NUMBER")?,
            issue_title: lookup("ISSUE_TITLE").unwrap_or_default(),
            comment_id: parse_number(&lookup, "COMMENT_ID")?,
            is_pr: lookup("IS_PR")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            pr_number: parse_number(&lookup, "PR_NUMBER")?,
        };

        let response_file = lookup("MODFORGE_RESPONSE_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| match kind {
                EventKind::Comment => PathBuf::from(COMMENT_RESPONSE_FILE),
                EventKind::Issue => PathBuf::from(ISSUE_RESPONSE_FILE),
            });

        tracing::debug!(
            kind = ?event.kind,
            issue_number = event.issue_number,
            is_pr = event.is_pr,
            "Loaded event context"
        );

        Ok(Self {
            event,
            response_file,
        })
    }

    /// The issue or pull request number the response belongs to.
    pub fn thread_number(&self) -> u64 {
        if self.event.is_pr && self.event.pr_number != 0 {
            self.event.pr_number
        } else {
            self.event.issue_number
        }
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(0),
        Some(raw) if raw.trim().is_empty() => Ok(0),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            ModforgeError::config(format!("{} must be a number, got '{}'", key, raw))
        }),
    }
}
