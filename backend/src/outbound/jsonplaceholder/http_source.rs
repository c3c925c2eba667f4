//! Reqwest-backed JSONPlaceholder source adapter.
//!
//! This adapter owns transport details only: one GET per resource kind with
//! a fixed timeout, HTTP error mapping, and JSON decoding into port records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::dto::{CommentDto, UserDto};
use crate::domain::ports::{CommentRecord, DirectorySource, DirectorySourceError, UserRecord};

/// Errors raised while constructing the adapter.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The reqwest client could not be constructed.
    #[error("http client construction failed: {0}")]
    Client(#[from] reqwest::Error),
    /// The base URL cannot carry the resource path segments.
    #[error("upstream base url rejected: {0}")]
    BaseUrl(String),
}

/// Directory source adapter performing GET requests against one base URL.
pub struct JsonPlaceholderHttpSource {
    client: Client,
    users_endpoint: Url,
    comments_endpoint: Url,
}

impl JsonPlaceholderHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout. Resource endpoints are derived from `base_url` once, here.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the reqwest client cannot be constructed
    /// or `base_url` cannot carry path segments.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, BuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            users_endpoint: resource_endpoint(base_url, "users")?,
            comments_endpoint: resource_endpoint(base_url, "comments")?,
        })
    }

    async fn fetch_body(&self, endpoint: &Url) -> Result<Vec<u8>, DirectorySourceError> {
        let response = self
            .client
            .get(endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl DirectorySource for JsonPlaceholderHttpSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, DirectorySourceError> {
        let body = self.fetch_body(&self.users_endpoint).await?;
        parse_users(&body)
    }

    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, DirectorySourceError> {
        let body = self.fetch_body(&self.comments_endpoint).await?;
        parse_comments(&body)
    }
}

fn resource_endpoint(base_url: &Url, resource: &str) -> Result<Url, BuildError> {
    let mut endpoint = base_url.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| BuildError::BaseUrl(format!("{base_url} cannot be a base")))?
        .pop_if_empty()
        .push(resource);
    Ok(endpoint)
}

fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, DirectorySourceError> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body).map_err(|error| {
        DirectorySourceError::decode(format!("invalid users JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(UserDto::into_record).collect())
}

fn parse_comments(body: &[u8]) -> Result<Vec<CommentRecord>, DirectorySourceError> {
    let decoded: Vec<CommentDto> = serde_json::from_slice(body).map_err(|error| {
        DirectorySourceError::decode(format!("invalid comments JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(CommentDto::into_record).collect())
}

fn map_transport_error(error: reqwest::Error) -> DirectorySourceError {
    if error.is_timeout() {
        DirectorySourceError::timeout(error.to_string())
    } else {
        DirectorySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectorySourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            DirectorySourceError::timeout(message)
        }
        _ => DirectorySourceError::upstream_status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
