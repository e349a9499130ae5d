//! reqwest-backed transport

use crate::{
    error::TransportError,
    transport::{Downloader, HttpResponse, Transport},
    types::UploadSource,
    Config,
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    header,
    multipart::{Form, Part},
    Client, RequestBuilder, Response,
};
use tracing::debug;

/// Multipart field the service reads uploaded files from
const UPLOAD_FIELD: &str = "file";

/// HTTP transport over a shared reqwest client.
///
/// Cloning is cheap; one instance can serve as both the [`Transport`] and the
/// [`Downloader`] of a [`StorageClient`](crate::StorageClient).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: Client,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Create a new transport from the given configuration
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let mut headers = header::HeaderMap::new();
        let user_agent = config
            .user_agent
            .parse()
            .map_err(|_| TransportError::Config(format!("Invalid user agent: {}", config.user_agent)))?;
        headers.insert(header::USER_AGENT, user_agent);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            access_token: config.access_token.clone(),
        })
    }

    async fn send(&self, method: &str, url: &str, req: RequestBuilder) -> Result<Response, TransportError> {
        let req = match &self.access_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        debug!("Sending {} request to {}", method, url);
        Ok(req.send().await?)
    }

    async fn into_http_response(response: Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.send("GET", url, self.http.get(url)).await?;
        Self::into_http_response(response).await
    }

    async fn post(
        &self,
        url: &str,
        payload: Option<UploadSource>,
    ) -> Result<HttpResponse, TransportError> {
        let mut req = self.http.post(url);
        if let Some(source) = payload {
            req = req.multipart(upload_form(source).await?);
        }

        let response = self.send("POST", url, req).await?;
        Self::into_http_response(response).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.send("DELETE", url, self.http.delete(url)).await?;
        Self::into_http_response(response).await
    }
}

#[async_trait]
impl Downloader for HttpTransport {
    async fn download(&self, url: &str) -> Result<Bytes, TransportError> {
        let response = self.send("GET", url, self.http.get(url)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}

/// Build the single-part multipart body for an upload
async fn upload_form(source: UploadSource) -> Result<Form, TransportError> {
    let file_name = source.file_name();
    let data = match source {
        UploadSource::File(path) => Bytes::from(tokio::fs::read(&path).await?),
        UploadSource::Bytes { data, .. } => data,
    };

    let mime = mime_guess::from_path(&file_name).first_or_octet_stream();
    let len = data.len() as u64;
    let part = Part::stream_with_length(data, len)
        .file_name(file_name)
        .mime_str(mime.as_ref())?;

    Ok(Form::new().part(UPLOAD_FIELD, part))
}
