use crate::{ApiError, FileItem, IngestReport, PickedDirectory, UploadSource};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Async client for the docdex backend REST surface.
///
/// Every operation either resolves with its typed payload or fails with an
/// [`ApiError`]. Cheap to clone; clones share the underlying connection
/// pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
  client: reqwest::Client,
  base_url: String,
}

impl Default for ApiClient {
  fn default() -> Self {
    Self::new()
  }
}

impl ApiClient {
  pub fn new() -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }

  pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
    let mut url = url.into();
    while url.ends_with('/') {
      url.pop();
    }
    self.base_url = url;
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// List every indexed file, newest first.
  pub async fn list_files(&self) -> Result<Vec<FileItem>, ApiError> {
    debug!("GET /files/");
    let response = self.client.get(self.url("/files/")).send().await?;
    decode(response).await
  }

  /// Full-text search across indexed content.
  ///
  /// Result order is the backend's relevance order and an empty match list
  /// is a normal outcome, not an error. Preventing blank queries is the
  /// caller's job; the query is encoded for transport here.
  pub async fn search(&self, query: &str) -> Result<Vec<FileItem>, ApiError> {
    debug!(query, "GET /search/");
    let response = self
      .client
      .get(self.url("/search/"))
      .query(&[("q", query)])
      .send()
      .await?;
    decode(response).await
  }

  /// Upload one file as multipart form content under the `file` field.
  pub async fn upload(&self, source: UploadSource) -> Result<FileItem, ApiError> {
    debug!(name = %source.name, size = source.bytes.len(), "POST /upload/");
    let part = multipart::Part::bytes(source.bytes).file_name(source.name);
    let form = multipart::Form::new().part("file", part);
    let response = self.client.post(self.url("/upload/")).multipart(form).send().await?;
    decode(response).await
  }

  /// Ask the backend to ingest a directory from its local filesystem.
  ///
  /// The path must be absolute on the machine running the backend; beyond
  /// non-emptiness it is not validated here.
  pub async fn ingest_directory(&self, path: &str) -> Result<IngestReport, ApiError> {
    debug!(path, "POST /ingest/");
    let response = self
      .client
      .post(self.url("/ingest/"))
      .json(&json!({ "path": path }))
      .send()
      .await?;
    decode(response).await
  }

  /// Open an indexed file in the backend host's native viewer.
  pub async fn open_file(&self, path: &str) -> Result<(), ApiError> {
    debug!(path, "POST /open/");
    let response = self
      .client
      .post(self.url("/open/"))
      .json(&json!({ "path": path }))
      .send()
      .await?;
    check(response).await?;
    Ok(())
  }

  /// Trigger the backend-native directory chooser and wait for the answer.
  pub async fn pick_directory(&self) -> Result<PickedDirectory, ApiError> {
    debug!("POST /pick-directory/");
    let response = self.client.post(self.url("/pick-directory/")).send().await?;
    decode(response).await
  }
}

/// Reject non-success responses, preferring the backend's `{"error": …}`
/// field over the raw body for the message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }
  let body = response.text().await.unwrap_or_default();
  Err(ApiError::Service {
    status: status.as_u16(),
    message: service_message(status.as_u16(), &body),
  })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
  let response = check(response).await?;
  Ok(response.json().await?)
}

fn service_message(status: u16, body: &str) -> String {
  if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
    && let Some(message) = value.get("error").and_then(|e| e.as_str())
  {
    return message.to_string();
  }
  if body.trim().is_empty() {
    format!("backend returned status {status}")
  } else {
    body.trim().to_string()
  }
}
