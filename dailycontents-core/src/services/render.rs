//! Card rendering for user and post lists
//!
//! Turns records into presentation-neutral cards. Lists render in input
//! order with no sorting or filtering.

use serde::Serialize;

use crate::domain::{Post, User};

/// Page footer shown under every list
pub const FOOTER: &str = "© 2024 Daily Contents. All rights reserved.";

/// A titled section inside a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub heading: String,
    pub lines: Vec<String>,
}

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    /// `(label, value)` rows
    pub fields: Vec<(String, String)>,
    pub sections: Vec<CardSection>,
    pub footer: Option<String>,
}

/// Card for one user: name and handle, contact rows, company, id
pub fn user_card(user: &User) -> Card {
    let data = &user.data;
    Card {
        title: format!("{} (@{})", data.name, data.username),
        fields: vec![
            ("Email".to_string(), data.email.clone()),
            ("Phone".to_string(), data.phone.clone()),
            ("Website".to_string(), data.website.clone()),
        ],
        sections: vec![CardSection {
            heading: "Company".to_string(),
            lines: vec![data.company.name.clone(), data.company.catch_phrase.clone()],
        }],
        footer: Some(format!("User ID: {}", user.id)),
    }
}

/// Card for one post: title and body
pub fn post_card(post: &Post) -> Card {
    Card {
        title: post.title.clone(),
        fields: Vec::new(),
        sections: vec![CardSection {
            heading: String::new(),
            lines: vec![post.body.clone()],
        }],
        footer: None,
    }
}

pub fn user_cards(users: &[User]) -> Vec<Card> {
    users.iter().map(user_card).collect()
}

pub fn post_cards(posts: &[Post]) -> Vec<Card> {
    posts.iter().map(post_card).collect()
}
