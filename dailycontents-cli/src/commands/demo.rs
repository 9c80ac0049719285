//! Demo command - switch between the bundled sample data and the live API

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_data_dir;
use crate::output;
use dailycontents_core::services::{DemoService, DemoStatus};

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Serve users and posts from bundled sample data
    #[command(name = "on")]
    On,
    /// Fetch users and posts from the placeholder API again
    #[command(name = "off")]
    Off,
    /// Show which content source commands will use
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let demo_service = DemoService::new(&data_dir);

    match command {
        Some(DemoCommands::On) => {
            demo_service.enable()?;
            output::success("Demo mode enabled");
            println!("Bundled sample data will be used. Run 'daily users' to see it.");
            warn_if_overridden(&demo_service.status()?);
        }
        Some(DemoCommands::Off) => {
            demo_service.disable()?;
            let status = demo_service.status()?;
            output::success("Demo mode disabled");
            if let Some(url) = &status.api_base_url {
                println!("Users and posts will be fetched from {}", url.cyan());
            }
            warn_if_overridden(&status);
        }
        Some(DemoCommands::Status { json: true }) => {
            let status = demo_service.status()?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Some(DemoCommands::Status { json: false }) | None => {
            print_status(&demo_service.status()?);
        }
    }

    Ok(())
}

fn print_status(status: &DemoStatus) {
    if status.enabled {
        println!("Demo mode is {}", "ON".green());
    } else {
        println!("Demo mode is {}", "OFF".yellow());
    }
    println!("  Source: {}", status.source);
    if let Some(url) = &status.api_base_url {
        println!("  API: {}", url);
    }
    warn_if_overridden(status);
}

fn warn_if_overridden(status: &DemoStatus) {
    if status.env_override.is_some() && status.enabled != status.saved {
        output::warning(&format!(
            "DAILY_CONTENTS_DEMO_MODE keeps demo mode {} regardless of settings",
            if status.enabled { "on" } else { "off" }
        ));
    }
}
