//! Collaborator traits the client talks through

use crate::{error::TransportError, types::UploadSource};
use async_trait::async_trait;
use bytes::Bytes;

#[cfg(test)]
use mockall::automock;

/// Status and body of a completed HTTP exchange
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body, empty when the service sent none
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with no body
    pub fn empty(status: u16) -> Self {
        Self::new(status, Bytes::new())
    }
}

/// Verb-level HTTP transport.
///
/// Implementations return the status of every completed exchange, including
/// non-2xx ones. An `Err` means the exchange itself could not be completed
/// (connection refused, timeout, unreadable upload source).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url`
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// POST `url`, with the upload source as payload when given
    async fn post(
        &self,
        url: &str,
        payload: Option<UploadSource>,
    ) -> Result<HttpResponse, TransportError>;

    /// DELETE `url`
    async fn delete(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Resolves a URL to the raw content behind it
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str) -> Result<Bytes, TransportError>;
}
