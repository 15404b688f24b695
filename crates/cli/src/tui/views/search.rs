use crate::format::format_size;
use crate::tui::theme::Theme;
use crate::tui::views::fit_width;
use docdex_api::FileItem;
use docdex_session::{SearchSession, decode_snippet};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Style, Stylize},
  widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Rows a single result occupies in the list.
const ROWS_PER_RESULT: u16 = 3;

/// Search surface: query bar plus the result list.
pub struct SearchScreen<'a> {
  session: &'a SearchSession,
  selected: usize,
  query_focused: bool,
}

impl<'a> SearchScreen<'a> {
  pub fn new(session: &'a SearchSession, selected: usize, query_focused: bool) -> Self {
    Self {
      session,
      selected,
      query_focused,
    }
  }
}

impl Widget for SearchScreen<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(3), Constraint::Min(5)])
      .split(area);

    self.render_query_bar(chunks[0], buf);
    self.render_results(chunks[1], buf);
  }
}

impl SearchScreen<'_> {
  fn render_query_bar(&self, area: Rect, buf: &mut Buffer) {
    let border_color = if self.query_focused { Theme::ACCENT } else { Theme::OVERLAY };
    let block = Block::default()
      .title("SEARCH")
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    buf.set_string(inner.x, inner.y, "> ", Style::default().fg(Theme::ACCENT));

    let budget = inner.width.saturating_sub(4) as usize;
    let query = &self.session.query;
    let query_display = if query.width() > budget {
      let skip = query.width() - budget.saturating_sub(3);
      let mut tail = String::new();
      let mut skipped = 0usize;
      for c in query.chars() {
        if skipped < skip {
          skipped += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        } else {
          tail.push(c);
        }
      }
      format!("…{tail}")
    } else {
      query.clone()
    };
    buf.set_string(inner.x + 2, inner.y, &query_display, Style::default().fg(Theme::TEXT));

    if self.query_focused {
      let cursor_x = inner.x + 2 + query_display.width() as u16;
      if cursor_x < inner.x + inner.width {
        buf.set_string(cursor_x, inner.y, "▌", Style::default().fg(Theme::ACCENT));
      }
    }

    if self.session.is_loading() {
      let label = "Searching…";
      let x = inner.x + inner.width.saturating_sub(label.width() as u16 + 1);
      buf.set_string(x, inner.y, label, Style::default().fg(Theme::WARNING));
    }
  }

  fn render_results(&self, area: Rect, buf: &mut Buffer) {
    let results = self.session.results();
    let border_color = if self.query_focused { Theme::OVERLAY } else { Theme::ACCENT };
    let block = Block::default()
      .title(format!("RESULTS ({})", results.len()))
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    if results.is_empty() {
      let message = if self.session.is_loading() {
        "Searching…".to_string()
      } else if self.session.no_matches() {
        format!("No results found for \"{}\"", self.session.query.trim())
      } else {
        "Press / and type to search your documents".to_string()
      };
      buf.set_string(inner.x + 1, inner.y, message, Style::default().fg(Theme::MUTED));
      return;
    }

    let visible = (inner.height / ROWS_PER_RESULT).max(1) as usize;
    let start = if self.selected >= visible { self.selected - visible + 1 } else { 0 };

    for (i, file) in results.iter().enumerate().skip(start).take(visible) {
      let y = inner.y + ((i - start) as u16) * ROWS_PER_RESULT;
      self.render_result(file, inner.x, y, inner.width, i == self.selected, buf);
    }
  }

  fn render_result(&self, file: &FileItem, x: u16, y: u16, width: u16, selected: bool, buf: &mut Buffer) {
    let bg = if selected { Theme::SURFACE } else { Theme::BG };
    for row in 0..ROWS_PER_RESULT {
      for col in 0..width {
        buf[(x + col, y + row)].set_bg(bg);
      }
    }

    let indicator = if selected { "▶ " } else { "  " };
    buf.set_string(x, y, indicator, Style::default().fg(Theme::ACCENT));

    let badge = format!("[{}] ", file.file_type);
    buf.set_string(
      x + 2,
      y,
      &badge,
      Style::default().fg(Theme::file_type_color(&file.file_type)).bold(),
    );

    let size = format_size(file.size);
    let size_x = x + width.saturating_sub(size.len() as u16 + 1);
    buf.set_string(size_x, y, &size, Style::default().fg(Theme::MUTED));

    let name_x = x + 2 + badge.len() as u16;
    let name_budget = size_x.saturating_sub(name_x + 1) as usize;
    let name_style = if selected {
      Style::default().fg(Theme::TEXT).bold()
    } else {
      Style::default().fg(Theme::TEXT)
    };
    buf.set_string(name_x, y, fit_width(&file.name, name_budget), name_style);

    let path_budget = width.saturating_sub(4) as usize;
    buf.set_string(
      x + 4,
      y + 1,
      fit_width(&file.path, path_budget),
      Style::default().fg(Theme::MUTED),
    );

    if let Some(snippet) = &file.snippet {
      self.render_snippet(snippet, x + 4, y + 2, width.saturating_sub(5), buf);
    }
  }

  /// One line of decoded snippet text, match spans styled.
  fn render_snippet(&self, snippet: &str, x: u16, y: u16, width: u16, buf: &mut Buffer) {
    let mut cursor = 0usize;
    let budget = width as usize;

    for span in decode_snippet(snippet) {
      if cursor >= budget {
        break;
      }
      let flat = span.text.replace(['\n', '\r'], " ");
      let text = fit_width(&flat, budget - cursor);
      let style = if span.highlighted {
        Style::default().fg(Theme::MATCH).bold()
      } else {
        Style::default().fg(Theme::SUBTEXT)
      };
      buf.set_string(x + cursor as u16, y, &text, style);
      cursor += text.width();
    }
  }
}
