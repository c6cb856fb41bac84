use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use item_cli::{Console, Session, UreqTransport, DEFAULT_BASE_URL};
use item_core::ItemClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "item-client")]
#[command(about = "Command-line client for the item service")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Get items
    Get,
    /// Add item
    Add,
    /// Update item
    Update,
    /// Delete item
    Delete,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = std::env::var("ITEM_SERVER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    tracing::debug!(%base_url, command = ?cli.command, "running command");

    let mut session = Session::new(
        ItemClient::new(&base_url),
        UreqTransport::new(),
        Console::new(io::stdin().lock(), io::stdout().lock()),
    );
    let result = match cli.command {
        Command::Get => session.get_items(),
        Command::Add => session.add_item(),
        Command::Update => session.update_item(),
        Command::Delete => session.delete_item(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
