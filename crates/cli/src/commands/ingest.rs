use crate::config::Config;
use anyhow::{Result, ensure};
use docdex_session::{Ingestor, StatusKind};

/// Ask the backend to ingest a directory from its local filesystem.
pub async fn cmd_ingest(config: &Config, path: &str) -> Result<()> {
  ensure!(!path.trim().is_empty(), "ingest path must not be blank");

  let client = config.client();
  let mut ingestor = Ingestor::new();
  ingestor.ingest_directory(&client, path).await;

  if let Some(status) = &ingestor.status {
    println!("{}", status.message);
    if !status.errors.is_empty() {
      println!("\n{} files were skipped:", status.errors.len());
      for error in &status.errors {
        println!("  {error}");
      }
    }
    if status.kind == StatusKind::Error {
      std::process::exit(1);
    }
  }
  Ok(())
}
