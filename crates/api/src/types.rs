use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One indexed document, as the backend reports it.
///
/// Owned and versioned entirely by the backend; the client never mutates
/// one. `path` is the key used for open-file requests. `snippet` is only
/// populated on search results, never on listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileItem {
  pub id: i64,
  pub name: String,
  pub path: String,
  pub file_type: String,
  pub size: u64,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub snippet: Option<String>,
}

/// Outcome of a directory ingest run on the backend host.
///
/// `errors` lists per-file failures and can be non-empty even when the run
/// as a whole succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
  pub status: String,
  pub count: u64,
  #[serde(default)]
  pub errors: Vec<String>,
}

/// Answer from the backend-native directory chooser.
///
/// `path: None` means the user cancelled the dialog, which is not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickedDirectory {
  pub path: Option<String>,
}

/// File content staged for upload.
#[derive(Debug, Clone)]
pub struct UploadSource {
  pub name: String,
  pub bytes: Vec<u8>,
}

impl UploadSource {
  pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self {
      name: name.into(),
      bytes,
    }
  }

  /// Stage a local file for upload, named after its final path component.
  pub async fn from_path(path: &Path) -> std::io::Result<Self> {
    let name = path
      .file_name()
      .and_then(|n| n.to_str())
      .unwrap_or("file")
      .to_string();
    let bytes = tokio::fs::read(path).await?;
    Ok(Self { name, bytes })
  }
}
