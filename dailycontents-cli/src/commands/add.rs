//! Add command - the "Add New User" form
//!
//! Fields come from `--set PATH=VALUE` arguments, or are prompted for one by
//! one when none are given and stdin is a terminal. The finished user is
//! appended to the freshly fetched list, which is then shown again.

use anyhow::{Context, Result};
use colored::Colorize;
use dailycontents_core::services::render::user_cards;
use dailycontents_core::services::UserForm;
use dailycontents_core::{FieldPath, LogEvent};
use dialoguer::{Confirm, Input};

use super::{get_context, get_logger, log_event};
use crate::output;

/// Split a `PATH=VALUE` argument; the value may itself contain `=`
fn parse_assignment(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .with_context(|| format!("Expected PATH=VALUE, got '{}'", arg))
}

fn prompt_fields(form: &mut UserForm) -> Result<()> {
    println!("{}", "Add New User".bold());

    let mut section = "";
    for path in FieldPath::ALL {
        if path.section() != section {
            section = path.section();
            println!();
            println!("{}", section.bold());
        }

        let value: String = Input::new()
            .with_prompt(path.label())
            .allow_empty(true)
            .interact_text()?;
        form.edit(path, value);
    }

    println!();
    Ok(())
}

pub fn run(sets: Vec<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    let source = ctx.content_service.source_name().to_string();

    let pb = output::spinner("Fetching users...");
    let result = ctx.content_service.load_directory();
    pb.finish_and_clear();

    let mut directory = result.map_err(|e| {
        log_event(
            &logger,
            LogEvent::new("fetch_failed")
                .with_source(&source)
                .with_command("add")
                .with_error(format!("{:#}", e)),
        );
        e
    })?;

    let mut form = directory.open_form();
    log_event(&logger, LogEvent::new("form_opened").with_command("add"));

    for arg in &sets {
        let (path, value) = parse_assignment(arg)?;
        form.edit_str(path, value)?;
    }

    let interactive = sets.is_empty() && !json && atty::is(atty::Stream::Stdin);
    if interactive {
        prompt_fields(&mut form)?;

        let confirmed = Confirm::new()
            .with_prompt("Add user?")
            .default(true)
            .interact()?;
        if !confirmed {
            form.cancel(|| log_event(&logger, LogEvent::new("form_closed").with_command("add")));
            println!("Cancelled.");
            return Ok(());
        }
    }

    let submission = form.submit(
        |user| directory.accept(user),
        || log_event(&logger, LogEvent::new("form_closed").with_command("add")),
    )?;

    match &submission.error {
        None => log_event(&logger, LogEvent::new("user_submitted").with_command("add")),
        Some(error) => log_event(
            &logger,
            LogEvent::new("user_rejected")
                .with_command("add")
                .with_error(error.clone()),
        ),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }

    match &submission.error {
        None => output::success(&format!("Added user {}", submission.record.id)),
        Some(error) => output::warning(&format!("User was not added: {}", error)),
    }
    println!();

    output::header("Users");
    output::print_cards(&user_cards(directory.users()));
    output::footer();

    Ok(())
}
