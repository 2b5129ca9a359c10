use anyhow::{Context, Result};
use async_trait::async_trait;
use modforge_core::config::{AutomationConfig, EventKind};
use modforge_core::dispatch::{CommandHandler, Dispatcher, HandlerReply};
use modforge_core::slash_command::{Command, CommandKind, find_builtin_command};
use std::path::PathBuf;
use std::sync::Arc;

use super::utils::{collect_commands, issue_guidance, write_file};

/// Acknowledges commands whose real work happens in a later workflow step.
///
/// The model-backed handlers read the plan file written next to the
/// response; this handler only tells the requester what was picked up.
struct AcknowledgeHandler;

#[async_trait]
impl CommandHandler for AcknowledgeHandler {
    async fn handle(&self, command: &Command) -> modforge_core::Result<HandlerReply> {
        let description = find_builtin_command(command.kind().keyword())
            .map(|builtin| builtin.description)
            .unwrap_or("Process the command");
        Ok(HandlerReply::message(format!(
            "Queued `{}` for processing ({}).",
            command.to_slash(),
            description
        )))
    }
}

fn build_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::with_help();
    dispatcher.register_all(
        CommandKind::ALL
            .into_iter()
            .filter(|kind| *kind != CommandKind::Help),
        Arc::new(AcknowledgeHandler),
    );
    dispatcher
}

pub async fn run(output: Option<PathBuf>, plan: Option<PathBuf>) -> Result<()> {
    let config = AutomationConfig::from_env().context("Failed to load event context")?;
    respond(&config, output, plan).await?;
    Ok(())
}

/// Returns the path of the written response, or `None` when a comment held
/// no commands. Issues without commands get a usage reply instead.
async fn respond(
    config: &AutomationConfig,
    output: Option<PathBuf>,
    plan: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    tracing::info!(
        number = config.thread_number(),
        is_pr = config.event.is_pr,
        "Processing event"
    );

    let response_path = output.unwrap_or_else(|| config.response_file.clone());

    let commands = collect_commands(&config.event);
    if commands.is_empty() {
        tracing::info!("No valid commands found");
        if config.event.kind != EventKind::Issue {
            return Ok(None);
        }
        write_file(&response_path, &issue_guidance(&config.event.body))?;
        tracing::info!(path = %response_path.display(), "Usage reply prepared");
        return Ok(Some(response_path));
    }

    if let Some(plan_path) = plan {
        let json = serde_json::to_string_pretty(&commands)?;
        write_file(&plan_path, &json)?;
        tracing::info!(path = %plan_path.display(), "Command plan written");
    }

    let report = build_dispatcher().dispatch(&commands).await;

    write_file(&response_path, &report.render_markdown())?;
    tracing::info!(path = %response_path.display(), "Response prepared");

    Ok(Some(response_path))
}
