//! JSONPlaceholder API client
//!
//! Fetches users and posts from the public placeholder REST API
//! (https://jsonplaceholder.typicode.com). One GET per call, no retries.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::domain::{Post, User};
use crate::ports::ContentSource;

/// Public placeholder API
pub const JSONPLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// JSONPlaceholder API client
#[derive(Debug)]
pub struct JsonPlaceholderClient {
    client: Client,
    base_url: String,
}

impl JsonPlaceholderClient {
    /// Create a client for the public API
    pub fn new() -> Result<Self> {
        Self::new_with_base_url(JSONPLACEHOLDER_URL)
    }

    /// Create a client against a custom base URL (mirrors, local mocks)
    pub fn new_with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).context("Invalid URL format")?;

        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            anyhow::bail!("API base URL must use HTTP or HTTPS");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /users
    pub fn get_users(&self) -> Result<Vec<User>> {
        self.get_list("users")
    }

    /// GET /posts
    pub fn get_posts(&self) -> Result<Vec<Post>> {
        self.get_list("posts")
    }

    fn get_list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        response
            .json::<Vec<T>>()
            .with_context(|| format!("Failed to parse /{} response", resource))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after {} seconds", REQUEST_TIMEOUT_SECS)
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to {}", self.base_url)
        } else {
            anyhow::anyhow!("Request failed: {}", error)
        }
    }

    /// Check response status and return appropriate errors
    fn check_response_status(&self, response: &reqwest::blocking::Response) -> Result<()> {
        match response.status().as_u16() {
            200 => Ok(()),
            404 => anyhow::bail!("Resource not found: {}", response.url()),
            429 => anyhow::bail!("Rate limit exceeded by {}", self.base_url),
            status => anyhow::bail!("API error: HTTP {}", status),
        }
    }
}

// =============================================================================
// JsonPlaceholderSource - implements ContentSource trait
// =============================================================================

/// Content source backed by the placeholder REST API
pub struct JsonPlaceholderSource {
    client: JsonPlaceholderClient,
}

impl JsonPlaceholderSource {
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let client = JsonPlaceholderClient::new_with_base_url(base_url)
            .map_err(|e| DomainError::config(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

impl ContentSource for JsonPlaceholderSource {
    fn name(&self) -> &str {
        "jsonplaceholder"
    }

    fn fetch_users(&self) -> DomainResult<Vec<User>> {
        self.client
            .get_users()
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))
    }

    fn fetch_posts(&self) -> DomainResult<Vec<Post>> {
        self.client
            .get_posts()
            .map_err(|e| DomainError::fetch(format!("{:#}", e)))
    }
}
