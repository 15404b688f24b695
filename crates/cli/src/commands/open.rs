use crate::config::Config;
use anyhow::{Context, Result};

/// Open an indexed file in the backend host's native viewer.
pub async fn cmd_open(config: &Config, path: &str) -> Result<()> {
  let client = config.client();
  client
    .open_file(path)
    .await
    .with_context(|| format!("Failed to open {path}"))?;
  println!("Opened {path}");
  Ok(())
}
