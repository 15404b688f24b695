use crate::tui::app::InputMode;
use crate::tui::theme::Theme;
use crate::tui::views::fit_width;
use docdex_session::{Ingestor, StatusKind};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Style, Stylize},
  widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Modal panel for the two ingestion workflows.
pub struct IngestPanel<'a> {
  ingest: &'a Ingestor,
  files_input: &'a str,
  path_input: &'a str,
  mode: InputMode,
}

impl<'a> IngestPanel<'a> {
  pub fn new(ingest: &'a Ingestor, files_input: &'a str, path_input: &'a str, mode: InputMode) -> Self {
    Self {
      ingest,
      files_input,
      path_input,
      mode,
    }
  }
}

impl Widget for IngestPanel<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let width = 64.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let panel = Rect::new(x, y, width, height);

    for py in panel.y..panel.y + panel.height {
      for px in panel.x..panel.x + panel.width {
        buf[(px, py)].set_bg(Theme::SURFACE).set_char(' ');
      }
    }

    let block = Block::default()
      .title("Add Files")
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::ACCENT));
    let inner = block.inner(panel);
    block.render(panel, buf);

    let mut row = inner.y;
    row = self.render_field(
      "Upload files (space-separated paths)",
      self.files_input,
      self.mode == InputMode::UploadFiles,
      inner,
      row,
      buf,
    );

    let separator = "── or ──";
    let sep_x = inner.x + (inner.width.saturating_sub(separator.width() as u16)) / 2;
    buf.set_string(sep_x, row, separator, Style::default().fg(Theme::MUTED));
    row += 1;

    row = self.render_field(
      "Ingest a directory on the backend host (Ctrl+P to browse)",
      self.path_input,
      self.mode == InputMode::IngestPath,
      inner,
      row,
      buf,
    );

    self.render_status(inner, row + 1, buf);
  }
}

impl IngestPanel<'_> {
  fn render_field(&self, label: &str, value: &str, focused: bool, inner: Rect, row: u16, buf: &mut Buffer) -> u16 {
    let label_style = if focused {
      Style::default().fg(Theme::ACCENT).bold()
    } else {
      Style::default().fg(Theme::SUBTEXT)
    };
    buf.set_string(inner.x + 1, row, label, label_style);

    let prompt = "> ";
    buf.set_string(inner.x + 1, row + 1, prompt, Style::default().fg(Theme::ACCENT));
    let budget = inner.width.saturating_sub(5) as usize;
    let display = fit_width(value, budget);
    buf.set_string(inner.x + 3, row + 1, &display, Style::default().fg(Theme::TEXT));
    if focused {
      let cursor_x = inner.x + 3 + display.width() as u16;
      if cursor_x < inner.x + inner.width {
        buf.set_string(cursor_x, row + 1, "▌", Style::default().fg(Theme::ACCENT));
      }
    }
    row + 2
  }

  fn render_status(&self, inner: Rect, row: u16, buf: &mut Buffer) {
    if row >= inner.y + inner.height {
      return;
    }

    if self.ingest.loading {
      buf.set_string(inner.x + 1, row, "Working…", Style::default().fg(Theme::WARNING));
      return;
    }

    let Some(status) = &self.ingest.status else {
      return;
    };

    let (marker, color) = match status.kind {
      StatusKind::Success => ("✔ ", Theme::SUCCESS),
      StatusKind::Error => ("✘ ", Theme::ERROR),
    };
    let budget = inner.width.saturating_sub(4) as usize;
    buf.set_string(
      inner.x + 1,
      row,
      format!("{marker}{}", fit_width(&status.message, budget)),
      Style::default().fg(color),
    );

    if !status.errors.is_empty() && row + 1 < inner.y + inner.height {
      let summary = format!("{} files were skipped (see log for details)", status.errors.len());
      buf.set_string(
        inner.x + 3,
        row + 1,
        fit_width(&summary, budget),
        Style::default().fg(Theme::MUTED),
      );
    }
  }
}
