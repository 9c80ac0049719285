//! User directory - the in-memory user list behind the users page
//!
//! Holds fetched users followed by locally added ones, in that order.
//! Nothing is persisted; the directory lives as long as the process.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::{User, UserData};
use crate::ports::ContentSource;
use crate::services::form::{IdAllocator, UserForm};

pub struct UserDirectory {
    users: Vec<User>,
    ids: Arc<IdAllocator>,
}

impl UserDirectory {
    /// Empty directory allocating identifiers from 1
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            ids: Arc::new(IdAllocator::default()),
        }
    }

    /// Fetch the user list once from `source`
    pub fn load(source: &dyn ContentSource) -> Result<Self> {
        let users = source
            .fetch_users()
            .with_context(|| format!("Failed to fetch users from {}", source.name()))?;
        Ok(Self::from_users(users))
    }

    /// Directory seeded with an already fetched list
    pub fn from_users(users: Vec<User>) -> Self {
        let directory = Self {
            users,
            ids: Arc::new(IdAllocator::default()),
        };
        directory.ids.reserve_below(directory.next_id_floor());
        directory
    }

    /// All users in display order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// One past the largest identifier currently listed
    ///
    /// Saturates at `u64::MAX`, which leaves the allocator exhausted.
    pub fn next_id_floor(&self) -> u64 {
        self.users.iter().map(|u| u.id).max().map_or(1, |max| max.saturating_add(1))
    }

    /// Open an "Add New User" form whose identifiers come from this directory
    pub fn open_form(&self) -> UserForm {
        UserForm::open(Arc::clone(&self.ids))
    }

    /// Acceptance callback target: append a finalized user
    pub fn accept(&mut self, user: User) -> Result<()> {
        if self.users.iter().any(|u| u.id == user.id) {
            anyhow::bail!("User ID {} is already listed", user.id);
        }
        // Keep the allocator ahead of ids assigned elsewhere
        self.ids.reserve_below(user.id.saturating_add(1));
        self.users.push(user);
        Ok(())
    }

    /// Convenience: finalize `data` and accept it in one step
    pub fn add(&mut self, data: UserData) -> Result<User> {
        let user = data.with_id(self.ids.next_id()?);
        self.accept(user.clone())?;
        Ok(user)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
