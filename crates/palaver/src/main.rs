//! Palaver CLI binary.
//!
//! This binary provides command-line access to Palaver's functionality:
//! - Launch the chat interface
//! - Send one-shot prompts
//! - Manage saved chat history

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, build_config, handle_history_command, launch_chat, run_ask};

    // Pick up GROQ_API_KEY and friends from a .env file when present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Some(Commands::Ask { prompt }) => {
            let config = build_config(cli.model, cli.system_prompt)?;
            run_ask(config, &prompt).await?;
        }

        Some(Commands::History(history_cmd)) => {
            handle_history_command(history_cmd)?;
        }

        Some(Commands::Chat) | None => {
            let config = build_config(cli.model, cli.system_prompt)?;
            launch_chat(config).await?;
        }
    }

    Ok(())
}
