//! Content source port
//!
//! Defines the interface for retrieving users and posts from an external
//! source (the placeholder REST API, bundled demo data, test doubles).

use crate::domain::result::Result;
use crate::domain::{Post, User};

/// Content source trait
///
/// Each call performs exactly one retrieval. Implementations do not retry;
/// a failure is returned to the caller as-is.
pub trait ContentSource: Send + Sync {
    /// Source name (e.g., "jsonplaceholder", "demo")
    fn name(&self) -> &str;

    /// Fetch all users, in the order the source returns them
    fn fetch_users(&self) -> Result<Vec<User>>;

    /// Fetch all posts, in the order the source returns them
    fn fetch_posts(&self) -> Result<Vec<Post>>;
}
