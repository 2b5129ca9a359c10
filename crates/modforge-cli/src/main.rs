use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "modforge")]
#[command(about = "ModForge automation - detect and dispatch slash commands from issues and comments", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slash commands found in a text
    Detect {
        /// Text to scan (defaults to the event body from the environment)
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Read the text to scan from a file
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the command reference
    Help,
    /// Process the event from the environment and write the response comment
    Respond {
        /// Response file (defaults to MODFORGE_RESPONSE_FILE or the per-event default)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write the detected commands as JSON for later workflow steps
        #[arg(long)]
        plan: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries command output; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("modforge=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { text, file, format } => commands::detect::run(text, file, format)?,
        Commands::Help => commands::help::run(),
        Commands::Respond { output, plan } => commands::respond::run(output, plan).await?,
    }

    Ok(())
}
