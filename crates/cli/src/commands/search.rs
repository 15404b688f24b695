use crate::config::Config;
use anyhow::{Context, Result, ensure};
use docdex_session::snippet_plain;

/// One-shot search against the index.
pub async fn cmd_search(config: &Config, query: &str, json_output: bool) -> Result<()> {
  let query = query.trim();
  ensure!(!query.is_empty(), "search query must not be blank");

  let client = config.client();
  let results = client.search(query).await.context("Search failed")?;

  if json_output {
    println!("{}", serde_json::to_string_pretty(&results)?);
    return Ok(());
  }

  if results.is_empty() {
    println!("No results found for \"{query}\"");
    return Ok(());
  }

  println!("Found {} results:\n", results.len());
  for (rank, file) in results.iter().enumerate() {
    println!("{:>3}. {}  ({})", rank + 1, file.name, file.path);
    if let Some(snippet) = &file.snippet {
      let text = snippet_plain(snippet);
      for line in text.lines().filter(|l| !l.trim().is_empty()).take(3) {
        println!("     {}", line.trim());
      }
    }
    println!();
  }
  Ok(())
}
