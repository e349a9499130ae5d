//! Common types for the client SDK

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Container names in the order the service returned them
pub type ContainerListing = Vec<String>;

/// Contents of a container
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerContents {
    /// Directory names
    pub directories: Vec<String>,
    /// File names
    pub files: Vec<String>,
}

/// File content handed to [`StorageClient::upload_file`](crate::StorageClient::upload_file)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadSource {
    /// A file on the local filesystem, read by the transport
    File(PathBuf),
    /// An in-memory buffer uploaded under the given file name
    Bytes { file_name: String, data: Bytes },
}

impl UploadSource {
    /// Upload a local file
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Upload an in-memory buffer
    pub fn bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::Bytes {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Name the service will store the file under
    pub fn file_name(&self) -> String {
        match self {
            Self::File(path) => file_name_of(path),
            Self::Bytes { file_name, .. } => file_name.clone(),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
