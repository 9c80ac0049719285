//! Log database migrations - embedded SQL files
//!
//! Each migration is a tuple of (name, sql_content), compiled in with
//! include_str! and applied in order.

/// All log migrations, embedded at compile time.
/// Format: (filename, sql_content)
///
/// New migrations get the next NNN_description.sql name and an entry here.
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    (
        "001_initial_schema.sql",
        include_str!("001_initial_schema.sql"),
    ),
];
