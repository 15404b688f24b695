//! Backend connection configuration.
//!
//! Priority: `--backend` flag > `DOCDEX_BACKEND_URL` > user config file
//! (`~/.config/docdex/config.toml`) > built-in default.

use docdex_api::ApiClient;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
  backend: BackendSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct BackendSection {
  url: String,
}

impl Default for BackendSection {
  fn default() -> Self {
    Self {
      url: DEFAULT_BACKEND_URL.to_string(),
    }
  }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
  pub backend_url: String,
}

impl Config {
  pub fn load(flag: Option<&str>) -> Self {
    if let Some(url) = flag {
      return Self {
        backend_url: url.to_string(),
      };
    }
    if let Ok(url) = std::env::var("DOCDEX_BACKEND_URL")
      && !url.trim().is_empty()
    {
      return Self { backend_url: url };
    }
    Self {
      backend_url: from_file().unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
    }
  }

  pub fn client(&self) -> ApiClient {
    ApiClient::new().with_base_url(&self.backend_url)
  }
}

fn from_file() -> Option<String> {
  let path = config_file_path()?;
  let raw = std::fs::read_to_string(&path).ok()?;
  match toml::from_str::<ConfigFile>(&raw) {
    Ok(file) => Some(file.backend.url),
    Err(error) => {
      warn!(path = %path.display(), %error, "ignoring malformed config file");
      None
    }
  }
}

fn config_file_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("docdex").join("config.toml"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_file_parses_backend_section() {
    let file: ConfigFile = toml::from_str("[backend]\nurl = \"http://docbox:9000/api\"\n").unwrap();
    assert_eq!(file.backend.url, "http://docbox:9000/api");
  }

  #[test]
  fn empty_config_file_falls_back_to_default() {
    let file: ConfigFile = toml::from_str("").unwrap();
    assert_eq!(file.backend.url, DEFAULT_BACKEND_URL);
  }

  #[test]
  fn flag_wins_over_everything() {
    let config = Config::load(Some("http://elsewhere:1234/api"));
    assert_eq!(config.backend_url, "http://elsewhere:1234/api");
  }
}
