//! Ingestion workflows: bulk file upload and directory ingest.

use crate::IndexService;
use docdex_api::{ApiError, UploadSource};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overall outcome of one ingestion workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
  Success,
  Error,
}

/// Aggregate status of the most recent ingestion workflow.
///
/// Replaces any prior status when a workflow finishes and is cleared when
/// a new workflow starts or the ingestion panel closes. A `Success` status
/// always covers at least one successfully processed item.
#[derive(Debug, Clone)]
pub struct IngestStatus {
  pub kind: StatusKind,
  pub message: String,
  /// Number of files the backend processed during a directory ingest.
  pub processed: Option<u64>,
  /// Per-item failures in input order. Diagnostics only; they never
  /// downgrade an overall success.
  pub errors: Vec<String>,
}

impl IngestStatus {
  fn success(message: String) -> Self {
    Self {
      kind: StatusKind::Success,
      message,
      processed: None,
      errors: Vec::new(),
    }
  }

  fn error(message: String) -> Self {
    Self {
      kind: StatusKind::Error,
      message,
      processed: None,
      errors: Vec::new(),
    }
  }

  pub fn is_success(&self) -> bool {
    self.kind == StatusKind::Success
  }
}

/// Drives the two ingestion workflows and tracks their aggregate status.
///
/// The workflows are mutually exclusive per invocation; callers serialize
/// them through the `loading` flag.
#[derive(Debug, Default)]
pub struct Ingestor {
  pub loading: bool,
  pub status: Option<IngestStatus>,
}

impl Ingestor {
  pub fn new() -> Self {
    Self::default()
  }

  /// Upload a batch of pre-staged files, one at a time.
  ///
  /// Uploads stay strictly sequential so the backend never sees more than
  /// one in-flight request and the error list preserves input order. A
  /// failed upload never stops the rest of the batch; one success is
  /// enough for an overall success.
  pub async fn upload_files<S: IndexService>(&mut self, service: &S, sources: Vec<UploadSource>) {
    self.begin();
    let mut succeeded = 0usize;
    let mut errors = Vec::new();

    for source in sources {
      let name = source.name.clone();
      match service.upload(source).await {
        Ok(item) => {
          debug!(name = %item.name, path = %item.path, "uploaded");
          succeeded += 1;
        }
        Err(error) => errors.push(upload_error(&name, error.message())),
      }
    }

    self.finish_uploads(succeeded, errors);
  }

  /// Upload local files by path, staging each file's bytes right before
  /// its turn in the batch.
  ///
  /// A file that cannot be read is recorded as that file's failure, in
  /// order, and the batch continues.
  pub async fn upload_paths<S: IndexService>(&mut self, service: &S, paths: &[PathBuf]) {
    self.begin();
    let mut succeeded = 0usize;
    let mut errors = Vec::new();

    for path in paths {
      let name = file_label(path);
      match UploadSource::from_path(path).await {
        Ok(source) => match service.upload(source).await {
          Ok(item) => {
            debug!(name = %item.name, path = %item.path, "uploaded");
            succeeded += 1;
          }
          Err(error) => errors.push(upload_error(&name, error.message())),
        },
        Err(error) => errors.push(upload_error(&name, &error.to_string())),
      }
    }

    self.finish_uploads(succeeded, errors);
  }

  /// Ask the backend to ingest a directory from its local filesystem.
  ///
  /// A blank path is a no-op: no request is issued and the prior status
  /// stays in place. Per-item errors reported by the backend are kept for
  /// diagnostics without downgrading an overall success.
  pub async fn ingest_directory<S: IndexService>(&mut self, service: &S, path: &str) {
    let path = path.trim();
    if path.is_empty() {
      return;
    }

    self.begin();
    match service.ingest_directory(path).await {
      Ok(report) => {
        if !report.errors.is_empty() {
          warn!(path, skipped = report.errors.len(), "directory ingest skipped some files");
        }
        let mut status = IngestStatus::success(format!("Successfully processed {} files.", report.count));
        status.processed = Some(report.count);
        status.errors = report.errors;
        self.status = Some(status);
      }
      Err(error) => {
        warn!(path, %error, "directory ingest failed");
        let message = match &error {
          ApiError::Service { message, .. } if !message.is_empty() => message.clone(),
          _ => "Failed to ingest files.".to_string(),
        };
        self.status = Some(IngestStatus::error(message));
      }
    }
    self.loading = false;
  }

  /// Forget the last workflow's status, e.g. when the panel closes.
  pub fn clear_status(&mut self) {
    self.status = None;
  }

  fn begin(&mut self) {
    self.loading = true;
    self.status = None;
  }

  fn finish_uploads(&mut self, succeeded: usize, errors: Vec<String>) {
    if !errors.is_empty() {
      warn!(failed = errors.len(), succeeded, "upload batch had failures");
    }

    // An empty batch reports nothing at all.
    if succeeded > 0 {
      let mut status = IngestStatus::success(format!("Successfully uploaded {succeeded} files."));
      status.errors = errors;
      self.status = Some(status);
    } else if !errors.is_empty() {
      let mut status = IngestStatus::error("Failed to upload files.".to_string());
      status.errors = errors;
      self.status = Some(status);
    }
    self.loading = false;
  }
}

fn upload_error(name: &str, message: &str) -> String {
  format!("Failed to upload {name}: {message}")
}

fn file_label(path: &Path) -> String {
  path
    .file_name()
    .and_then(|n| n.to_str())
    .map(str::to_string)
    .unwrap_or_else(|| path.display().to_string())
}
