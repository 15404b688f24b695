use crate::config::Config;
use crate::format::format_size;
use anyhow::{Context, Result};

/// List indexed files, newest first.
pub async fn cmd_list(config: &Config, json_output: bool) -> Result<()> {
  let client = config.client();
  let files = client.list_files().await.context("Failed to list files")?;

  if json_output {
    println!("{}", serde_json::to_string_pretty(&files)?);
    return Ok(());
  }

  if files.is_empty() {
    println!("No files indexed yet.");
    return Ok(());
  }

  println!("{} indexed files:\n", files.len());
  for file in &files {
    println!(
      "  {}  [{:>4}] {:>9}  {}",
      file.created_at.format("%Y-%m-%d %H:%M"),
      file.file_type,
      format_size(file.size),
      file.name,
    );
    println!("      {}", file.path);
  }
  Ok(())
}
