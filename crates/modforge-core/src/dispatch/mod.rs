//! Command dispatch.
//!
//! The dispatcher maps each detected [`Command`] to the handler registered for
//! its kind and runs them one at a time, in the order they were written.
//! Handlers do the actual work (file lookup, model calls, staging changes) and
//! live outside this crate, except for `/help` whose reply is static.

pub mod report;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::slash_command::{Command, CommandKind, render_help};

pub use report::{CommandOutcome, DispatchReport};

/// What a handler sends back for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerReply {
    /// Markdown shown under the command in the response comment
    pub message: String,
    /// Changes made to the repository, listed once at the end of the response
    pub changes: Vec<String>,
}

impl HandlerReply {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changes: Vec::new(),
        }
    }

    pub fn with_change(mut self, change: impl Into<String>) -> Self {
        self.changes.push(change.into());
        self
    }
}

/// Performs the work behind one command kind.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles one command. Errors are reported back to the user as text by
    /// the dispatcher; they never abort the remaining commands.
    async fn handle(&self, command: &Command) -> Result<HandlerReply>;
}

/// Answers `/help` with the static command reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(&self, _command: &Command) -> Result<HandlerReply> {
        Ok(HandlerReply::message(render_help()))
    }
}

/// Routes commands to handlers keyed by [`CommandKind`].
#[derive(Default, Clone)]
pub struct Dispatcher {
    handlers: HashMap<CommandKind, Arc<dyn CommandHandler>>,
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with [`HelpHandler`] registered for `/help`.
    pub fn with_help() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(CommandKind::Help, Arc::new(HelpHandler));
        dispatcher
    }

    /// Registers `handler` for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: CommandKind, handler: Arc<dyn CommandHandler>) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// Registers the same handler for several kinds.
    pub fn register_all(
        &mut self,
        kinds: impl IntoIterator<Item = CommandKind>,
        handler: Arc<dyn CommandHandler>,
    ) -> &mut Self {
        for kind in kinds {
            self.handlers.insert(kind, handler.clone());
        }
        self
    }

    pub fn handles(&self, kind: CommandKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Runs every command in order and collects the outcomes.
    ///
    /// Never fails: handler errors and unregistered kinds become textual
    /// outcomes in the report.
    pub async fn dispatch(&self, commands: &[Command]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for command in commands {
            tracing::info!(command = %command, "Processing command");

            let Some(handler) = self.handlers.get(&command.kind()) else {
                tracing::warn!(kind = %command.kind(), "No handler registered");
                report.push(CommandOutcome::new(
                    command.clone(),
                    format!("No handler registered for /{}", command.kind()),
                ));
                continue;
            };

            match handler.handle(command).await {
                Ok(reply) => {
                    report.changes.extend(reply.changes);
                    report.push(CommandOutcome::new(command.clone(), reply.message));
                }
                Err(e) => {
                    tracing::error!(command = %command, error = %e, "Error executing command");
                    report.push(CommandOutcome::failed(command.clone(), format!("Error: {}", e)));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModforgeError;
    use std::sync::Mutex;

    /// Records every command it sees and replies with its slash form.
    #[derive(Default)]
    struct RecordingHandler {
        seen: Mutex<Vec<Command>>,
    }

    #[async_trait]
    impl CommandHandler for RecordingHandler {
        async fn handle(&self, command: &Command) -> Result<HandlerReply> {
            self.seen.lock().unwrap().push(command.clone());
            Ok(HandlerReply::message(format!("handled {}", command))
                .with_change(format!("Touched {}", command.target().unwrap_or("-"))))
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl CommandHandler for FailingHandler {
        async fn handle(&self, command: &Command) -> Result<HandlerReply> {
            Err(ModforgeError::handler(format!(
                "Could not find target file: {}",
                command.target().unwrap_or_default()
            )))
        }
    }

    fn fix(target: &str) -> Command {
        Command::Fix {
            target: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_in_order() {
        let recorder = Arc::new(RecordingHandler::default());
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_all([CommandKind::Fix, CommandKind::Test], recorder.clone());

        let commands = vec![
            fix("B.java"),
            Command::Test {
                target: "A.java".to_string(),
            },
        ];
        let report = dispatcher.dispatch(&commands).await;

        assert_eq!(*recorder.seen.lock().unwrap(), commands);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].message, "handled /fix B.java");
        assert_eq!(report.changes, vec!["Touched B.java", "Touched A.java"]);
        assert!(report.outcomes.iter().all(|o| o.succeeded));
    }

    #[tokio::test]
    async fn test_handler_error_becomes_text() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(CommandKind::Fix, Arc::new(FailingHandler));
        dispatcher.register(CommandKind::Document, Arc::new(RecordingHandler::default()));

        let report = dispatcher
            .dispatch(&[
                fix("Missing.java"),
                Command::Document {
                    target: "Doc.java".to_string(),
                },
            ])
            .await;

        assert_eq!(report.outcomes.len(), 2);
        assert!(!report.outcomes[0].succeeded);
        assert_eq!(
            report.outcomes[0].message,
            "Error: Handler error: Could not find target file: Missing.java"
        );
        assert!(report.outcomes[1].succeeded);
    }

    #[tokio::test]
    async fn test_missing_handler() {
        let dispatcher = Dispatcher::new();
        let report = dispatcher.dispatch(&[fix("A.java")]).await;
        assert_eq!(report.outcomes[0].message, "No handler registered for /fix");
        assert!(report.changes.is_empty());
    }

    #[tokio::test]
    async fn test_help_handler() {
        let dispatcher = Dispatcher::with_help();
        assert!(dispatcher.handles(CommandKind::Help));
        assert!(!dispatcher.handles(CommandKind::Fix));

        let report = dispatcher.dispatch(&[Command::Help]).await;
        assert_eq!(report.outcomes[0].message, render_help());
    }

    #[tokio::test]
    async fn test_empty_dispatch() {
        let report = Dispatcher::with_help().dispatch(&[]).await;
        assert!(report.is_empty());
    }
}
