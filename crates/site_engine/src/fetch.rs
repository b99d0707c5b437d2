use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use site_core::JobRecord;
use site_logging::site_debug;

use crate::{decode_job_rows, FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(6),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Builds the HTTP client shared by every upstream source.
pub fn http_client(settings: &FetchSettings) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
}

#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError>;
}

/// Job postings from a spreadsheet-backed REST endpoint that answers `GET`
/// with a JSON array of row objects.
#[derive(Debug, Clone)]
pub struct SheetJobSource {
    client: reqwest::Client,
    url: String,
    max_bytes: u64,
}

impl SheetJobSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>, max_bytes: u64) -> Self {
        Self {
            client,
            url: url.into(),
            max_bytes,
        }
    }
}

#[async_trait::async_trait]
impl JobSource for SheetJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError> {
        let parsed = reqwest::Url::parse(&self.url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(status.as_u16()));
        }

        let bytes = read_body(response, self.max_bytes).await?;
        let records = decode_job_rows(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        site_debug!(
            "Fetched {} job rows ({} bytes) from {}",
            records.len(),
            bytes.len(),
            self.url
        );
        Ok(records)
    }
}

/// Reads the whole body, refusing anything over `max_bytes`.
pub(crate) async fn read_body(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Vec<u8>, FetchError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len)));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
