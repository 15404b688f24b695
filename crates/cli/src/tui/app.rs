use crate::tui::event::Action;
use crate::tui::theme::Theme;
use crate::tui::views::{IngestPanel, NoticeOverlay, SearchScreen};
use docdex_api::ApiClient;
use docdex_session::Shell;
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Style, Stylize},
  widgets::{Clear, Widget},
};
use std::path::PathBuf;
use tracing::warn;

/// Which input field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
  #[default]
  Normal,
  Query,
  UploadFiles,
  IngestPath,
}

impl InputMode {
  pub fn is_input(self) -> bool {
    self != InputMode::Normal
  }
}

/// Main application state: the session shell plus UI-local input state.
pub struct App {
  client: ApiClient,
  pub shell: Shell,
  pub input_mode: InputMode,
  pub selected: usize,
  pub files_input: String,
  pub path_input: String,
  should_quit: bool,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      client,
      shell: Shell::new(),
      input_mode: InputMode::Normal,
      selected: 0,
      files_input: String::new(),
      path_input: String::new(),
      should_quit: false,
    }
  }

  pub fn should_quit(&self) -> bool {
    self.should_quit
  }

  pub fn backend_url(&self) -> &str {
    self.client.base_url()
  }

  pub async fn handle_action(&mut self, action: Action) {
    // A pending notice blocks everything until acknowledged.
    if self.shell.notice().is_some() {
      match action {
        Action::Quit => self.should_quit = true,
        Action::Select | Action::Back | Action::Submit => self.shell.acknowledge(),
        _ => {}
      }
      return;
    }

    match action {
      Action::Quit => self.should_quit = true,
      Action::FocusSearch => {
        if !self.shell.ingest_open() {
          self.input_mode = InputMode::Query;
        }
      }
      Action::OpenIngest => {
        self.shell.open_ingest();
        self.input_mode = InputMode::UploadFiles;
      }
      Action::Back => self.back(),
      Action::Submit => self.submit().await,
      Action::Select => self.open_selected().await,
      Action::Input(c) => self.input_char(c),
      Action::DeleteChar => self.delete_char(),
      Action::NextField => self.next_field(),
      Action::PickDirectory => self.pick_directory().await,
      Action::NavigateUp => self.selected = self.selected.saturating_sub(1),
      Action::NavigateDown => self.navigate_down(),
      Action::GoToTop => self.selected = 0,
      Action::GoToBottom => {
        let len = self.shell.search.results().len();
        if len > 0 {
          self.selected = len - 1;
        }
      }
      Action::None => {}
    }
  }

  fn focused_input(&mut self) -> Option<&mut String> {
    match self.input_mode {
      InputMode::Query => Some(&mut self.shell.search.query),
      InputMode::UploadFiles => Some(&mut self.files_input),
      InputMode::IngestPath => Some(&mut self.path_input),
      InputMode::Normal => None,
    }
  }

  fn input_char(&mut self, c: char) {
    if let Some(input) = self.focused_input() {
      input.push(c);
    }
  }

  fn delete_char(&mut self) {
    if let Some(input) = self.focused_input() {
      input.pop();
    }
  }

  fn back(&mut self) {
    if self.shell.ingest_open() {
      self.shell.close_ingest();
      self.input_mode = InputMode::Normal;
    } else if self.input_mode.is_input() {
      self.input_mode = InputMode::Normal;
    }
  }

  fn next_field(&mut self) {
    if !self.shell.ingest_open() {
      return;
    }
    self.input_mode = match self.input_mode {
      InputMode::IngestPath => InputMode::UploadFiles,
      _ => InputMode::IngestPath,
    };
  }

  fn navigate_down(&mut self) {
    let len = self.shell.search.results().len();
    if len == 0 {
      return;
    }
    self.selected = (self.selected + 1).min(len - 1);
  }

  async fn submit(&mut self) {
    match self.input_mode {
      InputMode::Query => {
        self.shell.search.submit(&self.client).await;
        self.selected = 0;
        self.input_mode = InputMode::Normal;
      }
      InputMode::UploadFiles => self.run_upload().await,
      InputMode::IngestPath => self.run_directory_ingest().await,
      InputMode::Normal => {}
    }
  }

  async fn run_upload(&mut self) {
    if self.shell.ingest.loading {
      return;
    }
    let paths: Vec<PathBuf> = self.files_input.split_whitespace().map(PathBuf::from).collect();
    if paths.is_empty() {
      return;
    }
    self.shell.ingest.upload_paths(&self.client, &paths).await;
    if self.shell.ingest.status.as_ref().is_some_and(|s| s.is_success()) {
      self.files_input.clear();
    }
  }

  async fn run_directory_ingest(&mut self) {
    if self.shell.ingest.loading {
      return;
    }
    let path = self.path_input.clone();
    self.shell.ingest.ingest_directory(&self.client, &path).await;
  }

  async fn pick_directory(&mut self) {
    if !self.shell.ingest_open() {
      return;
    }
    match self.client.pick_directory().await {
      Ok(picked) => {
        // A missing path means the user cancelled the chooser.
        if let Some(path) = picked.path {
          self.path_input = path;
          self.input_mode = InputMode::IngestPath;
        }
      }
      Err(error) => warn!(%error, "directory picker failed"),
    }
  }

  async fn open_selected(&mut self) {
    if self.shell.ingest_open() {
      return;
    }
    let Some(item) = self.shell.search.results().get(self.selected) else {
      return;
    };
    let path = item.path.clone();
    self.shell.open_item(&self.client, &path).await;
  }

  /// Render the whole application into the buffer.
  pub fn render(&self, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    for y in area.y..area.y + area.height {
      for x in area.x..area.x + area.width {
        buf[(x, y)].set_bg(Theme::BG);
      }
    }

    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(2), // Header
        Constraint::Min(8),    // Search screen
        Constraint::Length(1), // Footer
      ])
      .split(area);

    self.render_header(chunks[0], buf);

    SearchScreen::new(
      &self.shell.search,
      self.selected,
      self.input_mode == InputMode::Query,
    )
    .render(chunks[1], buf);

    self.render_footer(chunks[2], buf);

    if self.shell.ingest_open() {
      IngestPanel::new(&self.shell.ingest, &self.files_input, &self.path_input, self.input_mode).render(area, buf);
    }

    if let Some(notice) = self.shell.notice() {
      NoticeOverlay::new(notice).render(area, buf);
    }
  }

  fn render_header(&self, area: Rect, buf: &mut Buffer) {
    let title = "docdex";
    buf.set_string(area.x + 1, area.y, title, Style::default().fg(Theme::ACCENT).bold());

    let backend = self.backend_url();
    let backend_x = area.x + area.width.saturating_sub(backend.len() as u16 + 2);
    buf.set_string(backend_x, area.y, backend, Style::default().fg(Theme::MUTED));

    for x in area.x..area.x + area.width {
      buf[(x, area.y + 1)].set_char('─').set_fg(Theme::OVERLAY);
    }
  }

  fn render_footer(&self, area: Rect, buf: &mut Buffer) {
    let keybindings = if self.shell.notice().is_some() {
      "Enter:Dismiss"
    } else if self.shell.ingest_open() {
      "Enter:Run  Tab:Switch field  Ctrl+P:Browse  Esc:Close"
    } else {
      match self.input_mode {
        InputMode::Query => "Enter:Search  Esc:Cancel",
        _ => "q:Quit  /:Search  a:Add files  j/k:Navigate  Enter:Open  g/G:Top/Bottom",
      }
    };
    buf.set_string(area.x + 1, area.y, keybindings, Style::default().fg(Theme::MUTED));
  }
}
