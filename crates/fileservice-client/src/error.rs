//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
///
/// Each storage operation fails with exactly one of the operation variants
/// below. Their messages are fixed; only [`ClientError::ContainerExists`] is
/// parameterized.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Listing containers did not return 200
    #[error("An error occurred while obtaining the list of available containers.")]
    ListContainers,

    /// Creating a container failed for a reason other than a name conflict
    #[error("An error occurred while creating the container.")]
    CreateContainer,

    /// The service answered 409 to a create request
    #[error("Container with the name \"{name}\" already exists.")]
    ContainerExists { name: String },

    /// Removing a container or path did not return 204
    #[error("An error occurred while removing the container or path.")]
    Delete,

    /// Listing the contents of a container did not return 200
    #[error("An error occurred while obtaining the content list of a container.")]
    ListContents,

    /// Uploading a file did not return 200
    #[error("An error occurred while uploading the file to the container.")]
    Upload,

    /// A successful response carried a body that is not the expected JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Fault raised by the transport or downloader, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Check if this is a "container already exists" conflict
    pub fn is_container_exists(&self) -> bool {
        matches!(self, Self::ContainerExists { .. })
    }

    /// Check if this error came from the transport rather than the service
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Errors produced by [`Transport`](crate::Transport) and
/// [`Downloader`](crate::Downloader) implementations
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error, e.g. while reading an upload source from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Download endpoint answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Invalid transport configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
