//! Composition root for an interactive session.

use crate::{IndexService, Ingestor, SearchSession};
use tracing::warn;

/// State shared between the search surface and the ingestion panel.
///
/// The shell owns the UI-level flags (panel visibility, pending notice)
/// so neither workflow needs an ambient singleton; the rendering layer
/// reads this struct and nothing else.
#[derive(Debug, Default)]
pub struct Shell {
  pub search: SearchSession,
  pub ingest: Ingestor,
  ingest_open: bool,
  notice: Option<String>,
}

impl Shell {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn ingest_open(&self) -> bool {
    self.ingest_open
  }

  pub fn open_ingest(&mut self) {
    self.ingest_open = true;
  }

  /// Close the ingestion panel. Its status does not outlive the panel.
  pub fn close_ingest(&mut self) {
    self.ingest_open = false;
    self.ingest.clear_status();
  }

  /// Ask the backend to open an indexed file in its native viewer.
  ///
  /// Search state is untouched either way. The user asked for this
  /// directly, so a failure becomes a notice they must acknowledge rather
  /// than a log line — the opposite of how search failures are handled.
  pub async fn open_item<S: IndexService>(&mut self, service: &S, path: &str) {
    if let Err(error) = service.open_file(path).await {
      warn!(path, %error, "open file failed");
      self.notice = Some(format!("Failed to open {path}: {}", error.message()));
    }
  }

  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }

  /// Dismiss the pending notice.
  pub fn acknowledge(&mut self) {
    self.notice = None;
  }
}
