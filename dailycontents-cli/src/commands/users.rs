//! Users command - fetch users and show them as cards

use anyhow::Result;
use dailycontents_core::services::render::user_cards;
use dailycontents_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let source = ctx.content_service.source_name().to_string();

    let pb = output::spinner("Fetching users...");
    let result = ctx.content_service.load_directory();
    pb.finish_and_clear();

    let directory = match result {
        Ok(directory) => directory,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("fetch_failed")
                    .with_source(&source)
                    .with_command("users")
                    .with_error(format!("{:#}", e)),
            );
            return Err(e);
        }
    };

    log_event(
        &logger,
        LogEvent::new("users_fetched")
            .with_source(&source)
            .with_command("users"),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(directory.users())?);
        return Ok(());
    }

    output::header("Users");
    if directory.is_empty() {
        output::warning("No users found.");
    } else {
        output::print_cards(&user_cards(directory.users()));
    }
    output::footer();

    Ok(())
}
