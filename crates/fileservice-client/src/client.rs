//! Main client implementation

use crate::{
    transport::{Downloader, Transport},
    types::*,
    ClientError, Config, HttpTransport, Result,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;
const STATUS_NO_CONTENT: u16 = 204;
const STATUS_CONFLICT: u16 = 409;

/// fileservice storage client
///
/// Holds only the base endpoint and its two collaborators. Every operation is
/// a single round trip; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct StorageClient<T = HttpTransport, D = HttpTransport> {
    endpoint: String,
    transport: T,
    downloader: D,
}

impl StorageClient {
    /// Create a client backed by [`HttpTransport`] for both requests and
    /// downloads
    pub fn from_config(config: Config) -> Result<Self> {
        let http = HttpTransport::new(&config)?;
        Ok(Self::new(config.endpoint, http.clone(), http))
    }

    /// Create with endpoint URL and default settings
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Self::from_config(Config::new(endpoint))
    }
}

impl<T: Transport, D: Downloader> StorageClient<T, D> {
    /// Create a new client. The endpoint is stored verbatim and prefixed to
    /// every request path.
    pub fn new(endpoint: impl Into<String>, transport: T, downloader: D) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            downloader,
        }
    }

    /// Base endpoint this client was built with
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // ==================== Container Operations ====================

    /// List all containers, in the order the service returns them
    #[instrument(skip(self))]
    pub async fn list_containers(&self) -> Result<ContainerListing> {
        let url = self.url("containers");
        let response = self.transport.get(&url).await?;
        if response.status != STATUS_OK {
            warn!(status = response.status, "Listing containers failed");
            return Err(ClientError::ListContainers);
        }
        parse_json(&response.body)
    }

    /// Create a container
    #[instrument(skip(self))]
    pub async fn create_container(&self, name: &str) -> Result<()> {
        let url = self.url(&format!("create/{}", name));
        let response = self.transport.post(&url, None).await?;
        match response.status {
            STATUS_CREATED => Ok(()),
            STATUS_CONFLICT => Err(ClientError::ContainerExists {
                name: name.to_string(),
            }),
            status => {
                warn!(status, "Creating container failed");
                Err(ClientError::CreateContainer)
            }
        }
    }

    /// Delete a container, or a path inside one.
    ///
    /// Unlike [`create_container`](Self::create_container), a 409 (e.g. a
    /// non-empty container) is not told apart: every status other than 204
    /// yields [`ClientError::Delete`].
    #[instrument(skip(self))]
    pub async fn delete_container_or_path(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = self.transport.delete(&url).await?;
        if response.status != STATUS_NO_CONTENT {
            warn!(status = response.status, "Removing container or path failed");
            return Err(ClientError::Delete);
        }
        Ok(())
    }

    /// List the directories and files of a container
    #[instrument(skip(self))]
    pub async fn get_container_contents(&self, name: &str) -> Result<ContainerContents> {
        let url = self.url(&format!("list/{}", name));
        let response = self.transport.get(&url).await?;
        if response.status != STATUS_OK {
            warn!(status = response.status, "Listing container contents failed");
            return Err(ClientError::ListContents);
        }
        parse_json(&response.body)
    }

    // ==================== File Operations ====================

    /// Upload a file into a container
    #[instrument(skip(self, source), fields(file = %source.file_name()))]
    pub async fn upload_file(&self, name: &str, source: UploadSource) -> Result<()> {
        let url = self.url(&format!("upload/{}", name));
        let response = self.transport.post(&url, Some(source)).await?;
        if response.status != STATUS_OK {
            warn!(status = response.status, "Uploading file failed");
            return Err(ClientError::Upload);
        }
        Ok(())
    }

    /// Download the file at `path`. The downloader's result is returned as is.
    #[instrument(skip(self))]
    pub async fn download_file(&self, path: &str) -> Result<Bytes> {
        let url = self.url(path);
        debug!("Downloading {}", url);
        Ok(self.downloader.download(&url).await?)
    }

    // ==================== Helper Methods ====================

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }
}

fn parse_json<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    Ok(serde_json::from_slice(body)?)
}
