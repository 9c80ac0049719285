//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod content;
mod demo;
pub mod directory;
pub mod form;
pub mod logging;
pub mod merge;
pub mod render;

pub use content::ContentService;
pub use demo::{DemoService, DemoStatus};
pub use directory::UserDirectory;
pub use form::{IdAllocator, UserForm};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use merge::{apply_edit, apply_edit_str};
pub use render::{post_card, post_cards, user_card, user_cards, Card, CardSection};
