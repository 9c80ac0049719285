//! User domain model
//!
//! Mirrors the `/users` payload of the placeholder API. Every leaf is a
//! `String` (geo coordinates included) and an unset leaf is `""`, never
//! missing, so missing keys in remote JSON deserialize to empty strings.

use serde::{Deserialize, Serialize};

/// Geographic coordinates, kept as text exactly as entered or served
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address with nested coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Employer information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    /// Business slogan
    pub bs: String,
}

/// A user record without an identifier
///
/// This is the shape the "Add New User" form edits. It becomes a [`User`]
/// once finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl UserData {
    /// A record with every leaf set to the empty string
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach an identifier, producing a finalized record
    pub fn with_id(self, id: u64) -> User {
        User { id, data: self }
    }
}

/// A finalized user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(flatten)]
    pub data: UserData,
}

impl User {
    pub fn new(id: u64, data: UserData) -> Self {
        Self { id, data }
    }
}
