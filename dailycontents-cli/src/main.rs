//! Daily Contents CLI - users and posts in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, demo, logs, posts, users};

/// Daily Contents - browse placeholder users and posts
#[derive(Parser)]
#[command(name = "daily", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users and show them as cards
    Users {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch posts and show them as cards
    Posts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new user to the list (kept in memory for this run only)
    Add {
        /// Set a field, e.g. --set name=Ada --set address.lat=51.5
        #[arg(long = "set", value_name = "PATH=VALUE")]
        sets: Vec<String>,
        /// Output the submission as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(logger) = commands::get_logger() {
        let _ = logger.log_command(command_name(&cli.command));
    }

    match cli.command {
        Commands::Users { json } => users::run(json),
        Commands::Posts { json } => posts::run(json),
        Commands::Add { sets, json } => add::run(sets, json),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Users { .. } => "users",
        Commands::Posts { .. } => "posts",
        Commands::Add { .. } => "add",
        Commands::Demo { .. } => "demo",
        Commands::Logs { .. } => "logs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_sets() {
        let cli = Cli::try_parse_from([
            "daily",
            "add",
            "--set",
            "name=Ada",
            "--set",
            "address.lat=51.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { sets, json } => {
                assert_eq!(sets, vec!["name=Ada", "address.lat=51.5"]);
                assert!(!json);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_users_json() {
        let cli = Cli::try_parse_from(["daily", "users", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Users { json: true }));
        assert_eq!(command_name(&cli.command), "users");
    }

    #[test]
    fn test_parse_demo_status_json() {
        let cli = Cli::try_parse_from(["daily", "demo", "status", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Demo {
                command: Some(demo::DemoCommands::Status { json: true })
            }
        ));

        let cli = Cli::try_parse_from(["daily", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo { command: None }));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
