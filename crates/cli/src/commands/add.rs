use crate::config::Config;
use anyhow::Result;
use docdex_session::{Ingestor, StatusKind};
use std::path::PathBuf;

/// Upload a batch of local files into the index.
///
/// Mirrors the interactive bulk-upload workflow: fail-soft per file, one
/// success is enough for an overall success, and the exit code reflects
/// the aggregate status.
pub async fn cmd_add(config: &Config, files: &[PathBuf]) -> Result<()> {
  let client = config.client();
  let mut ingestor = Ingestor::new();
  ingestor.upload_paths(&client, files).await;

  let Some(status) = &ingestor.status else {
    println!("Nothing to upload.");
    return Ok(());
  };

  println!("{}", status.message);
  for error in &status.errors {
    eprintln!("  {error}");
  }
  if status.kind == StatusKind::Error {
    std::process::exit(1);
  }
  Ok(())
}
