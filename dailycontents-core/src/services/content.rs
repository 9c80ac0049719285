//! Content service - one-shot retrieval for the users and posts pages

use anyhow::{Context, Result};

use crate::domain::Post;
use crate::ports::ContentSource;
use crate::services::directory::UserDirectory;

/// Fetches page data from the configured content source
pub struct ContentService {
    source: Box<dyn ContentSource>,
}

impl ContentService {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch users into a fresh in-memory directory
    pub fn load_directory(&self) -> Result<UserDirectory> {
        UserDirectory::load(self.source.as_ref())
    }

    /// Fetch posts in source order
    pub fn posts(&self) -> Result<Vec<Post>> {
        self.source
            .fetch_posts()
            .with_context(|| format!("Failed to fetch posts from {}", self.source.name()))
    }
}
