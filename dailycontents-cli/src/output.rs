//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use dailycontents_core::services::render::{Card, FOOTER};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Spinner shown while a fetch is in flight; hidden when stderr is not a TTY
pub fn spinner(msg: &str) -> ProgressBar {
    if atty::isnt(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Page header
pub fn header(title: &str) {
    println!("{}", title.bold().blue());
    println!();
}

/// Page footer
pub fn footer() {
    println!("{}", FOOTER.dimmed());
}

/// Render one card as a single-column table block
pub fn card_table(card: &Card) -> Table {
    let mut table = create_table();
    table.set_header(vec![Cell::new(card.title.bold().blue().to_string())]);

    for (label, value) in &card.fields {
        table.add_row(vec![format!("{}: {}", label, value)]);
    }

    for section in &card.sections {
        let mut text = String::new();
        if !section.heading.is_empty() {
            text.push_str(&section.heading.bold().to_string());
            text.push('\n');
        }
        text.push_str(&section.lines.join("\n"));
        table.add_row(vec![text]);
    }

    if let Some(footer) = &card.footer {
        table.add_row(vec![footer.dimmed().to_string()]);
    }

    table
}

/// Print cards in order, one block each
pub fn print_cards(cards: &[Card]) {
    for card in cards {
        println!("{}", card_table(card));
    }
}
