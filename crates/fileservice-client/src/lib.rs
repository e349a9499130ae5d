//! # fileservice client SDK
//!
//! A client for the fileservice container storage API. Containers hold
//! files and directories; the client lists, creates and removes containers,
//! lists their contents, and moves files in and out of them.
//!
//! ## Features
//!
//! - **Typed errors**: every failed status maps to one [`ClientError`] variant
//! - **Pluggable transport**: [`Transport`] and [`Downloader`] are traits, with
//!   a reqwest-backed [`HttpTransport`] bundled
//! - **Stateless**: the client owns only its base endpoint and is safe to share
//!
//! ## Example
//!
//! ```rust,ignore
//! use fileservice_client::{Config, StorageClient, UploadSource};
//!
//! #[tokio::main]
//! async fn main() -> fileservice_client::Result<()> {
//!     let client = StorageClient::from_config(Config::new("http://127.0.0.1:8080"))?;
//!
//!     client.create_container("photos").await?;
//!     client
//!         .upload_file("photos", UploadSource::file("./holiday.jpg"))
//!         .await?;
//!
//!     let contents = client.get_container_contents("photos").await?;
//!     println!("files: {:?}", contents.files);
//!
//!     let data = client.download_file("photos/holiday.jpg").await?;
//!     println!("downloaded {} bytes", data.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod http;
mod transport;
mod types;

pub use client::StorageClient;
pub use config::Config;
pub use error::{ClientError, Result, TransportError};
pub use http::HttpTransport;
pub use transport::{Downloader, HttpResponse, Transport};
pub use types::*;
