//! Interactive terminal session over the presentation shell.

mod app;
mod event;
mod theme;
mod views;

use crate::config::Config;
use anyhow::Result;
use app::App;
use crossterm::{
  event::{Event as CrosstermEvent, EventStream, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use event::key_to_action;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI until the user quits.
pub async fn run(config: &Config) -> Result<()> {
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut app = App::new(config.client());
  let mut events = EventStream::new();

  loop {
    terminal.draw(|frame| {
      app.render(frame.area(), frame.buffer_mut());
    })?;

    match events.next().await {
      Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
        let action = key_to_action(key, app.input_mode.is_input());
        app.handle_action(action).await;
      }
      // Resize and the rest redraw on the next pass.
      Some(Ok(_)) => {}
      Some(Err(_)) | None => break,
    }

    if app.should_quit() {
      break;
    }
  }

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  Ok(())
}
