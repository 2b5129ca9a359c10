use anyhow::Result;
use modforge_core::slash_command::{Command, detect};
use std::path::PathBuf;

use super::utils::resolve_input;
use crate::OutputFormat;

pub fn run(text: Option<String>, file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let input = resolve_input(text, file)?;
    let commands = detect(&input);

    if commands.is_empty() {
        tracing::info!("No valid commands found");
    }

    println!("{}", render(&commands, format)?);
    Ok(())
}

fn render(commands: &[Command], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(commands)?,
        OutputFormat::Text => commands
            .iter()
            .map(Command::to_slash)
            .collect::<Vec<_>>()
            .join("\n"),
    })
}
