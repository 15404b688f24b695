//! docdex CLI - search and feed a personal document index

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod format;
mod logging;
mod tui;

use commands::{cmd_add, cmd_ingest, cmd_list, cmd_open, cmd_search};
use config::Config;

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "Search and feed a personal document index")]
#[command(after_help = "\
QUICK START:
  docdex add report.pdf notes.md    # Upload files into the index
  docdex ingest /home/me/documents  # Index a directory on the backend host
  docdex search \"quarterly report\"  # Search indexed content
  docdex tui                        # Interactive session")]
struct Cli {
  /// Backend base URL (overrides DOCDEX_BACKEND_URL and the config file)
  #[arg(long, global = true, value_name = "URL")]
  backend: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List indexed files
  List {
    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// Search indexed content
  Search {
    /// Search query
    query: String,
    /// Print raw JSON instead of formatted results
    #[arg(long)]
    json: bool,
  },
  /// Upload files into the index
  Add {
    /// Files to upload, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
  /// Ingest a directory on the machine running the backend
  Ingest {
    /// Absolute path of the directory to ingest
    path: String,
  },
  /// Open an indexed file in the backend host's native viewer
  Open {
    /// File path as reported by `list` or `search`
    path: String,
  },
  /// Interactive terminal session
  Tui,
  /// Generate shell completions
  Completions {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  if let Commands::Completions { shell } = &cli.command {
    clap_complete::generate(*shell, &mut Cli::command(), "docdex", &mut std::io::stdout());
    return Ok(());
  }

  // The TUI owns the terminal, so its logs go to a file instead.
  let _guard = if matches!(&cli.command, Commands::Tui) {
    logging::init_tui_logging()
  } else {
    logging::init_cli_logging();
    None
  };

  let config = Config::load(cli.backend.as_deref());

  match cli.command {
    Commands::List { json } => cmd_list(&config, json).await,
    Commands::Search { query, json } => cmd_search(&config, &query, json).await,
    Commands::Add { files } => cmd_add(&config, &files).await,
    Commands::Ingest { path } => cmd_ingest(&config, &path).await,
    Commands::Open { path } => cmd_open(&config, &path).await,
    Commands::Tui => tui::run(&config).await,
    Commands::Completions { .. } => unreachable!("handled above"),
  }
}
