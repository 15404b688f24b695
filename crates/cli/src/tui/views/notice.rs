use crate::tui::theme::Theme;
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Style, Stylize},
  widgets::{Block, Borders, Widget},
};

/// Blocking acknowledgement overlay for user-initiated actions that
/// failed, e.g. opening a file the backend no longer has.
pub struct NoticeOverlay<'a> {
  message: &'a str,
}

impl<'a> NoticeOverlay<'a> {
  pub fn new(message: &'a str) -> Self {
    Self { message }
  }
}

impl Widget for NoticeOverlay<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let width = 56.min(area.width.saturating_sub(4));
    let text_width = width.saturating_sub(4) as usize;
    let lines = wrap(self.message, text_width.max(1));
    let height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let panel = Rect::new(x, y, width, height);

    for py in panel.y..panel.y + panel.height {
      for px in panel.x..panel.x + panel.width {
        buf[(px, py)].set_bg(Theme::SURFACE).set_char(' ');
      }
    }

    let block = Block::default()
      .title("NOTICE")
      .title_style(Style::default().fg(Theme::ERROR).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::ERROR));
    let inner = block.inner(panel);
    block.render(panel, buf);

    for (i, line) in lines.iter().enumerate() {
      let row = inner.y + i as u16;
      if row + 1 >= inner.y + inner.height {
        break;
      }
      buf.set_string(inner.x + 1, row, line, Style::default().fg(Theme::TEXT));
    }

    let hint = "Press Enter to dismiss";
    let hint_x = inner.x + (inner.width.saturating_sub(hint.len() as u16)) / 2;
    buf.set_string(
      hint_x,
      inner.y + inner.height.saturating_sub(1),
      hint,
      Style::default().fg(Theme::MUTED),
    );
  }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = String::new();
  for word in text.split_whitespace() {
    if !current.is_empty() && current.len() + word.len() + 1 > width {
      lines.push(std::mem::take(&mut current));
    }
    if !current.is_empty() {
      current.push(' ');
    }
    // A single overlong word is hard-broken.
    if word.len() > width {
      for chunk in word.as_bytes().chunks(width) {
        lines.push(String::from_utf8_lossy(chunk).to_string());
      }
      continue;
    }
    current.push_str(word);
  }
  if !current.is_empty() {
    lines.push(current);
  }
  lines
}
