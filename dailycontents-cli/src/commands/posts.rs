//! Posts command - fetch posts and show them as cards

use anyhow::Result;
use dailycontents_core::services::render::post_cards;
use dailycontents_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let source = ctx.content_service.source_name().to_string();

    let pb = output::spinner("Fetching posts...");
    let result = ctx.content_service.posts();
    pb.finish_and_clear();

    let posts = result.map_err(|e| {
        log_event(
            &logger,
            LogEvent::new("fetch_failed")
                .with_source(&source)
                .with_command("posts")
                .with_error(format!("{:#}", e)),
        );
        e
    })?;

    log_event(
        &logger,
        LogEvent::new("posts_fetched")
            .with_source(&source)
            .with_command("posts"),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    output::header("Posts");
    if posts.is_empty() {
        output::warning("No posts found.");
    } else {
        output::print_cards(&post_cards(&posts));
    }
    output::footer();

    Ok(())
}
