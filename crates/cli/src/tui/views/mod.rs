pub mod ingest;
pub mod notice;
pub mod search;

pub use ingest::IngestPanel;
pub use notice::NoticeOverlay;
pub use search::SearchScreen;

/// Clip text to a display width, ending with an ellipsis when cut.
pub(crate) fn fit_width(text: &str, max: usize) -> String {
  use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

  if text.width() <= max {
    return text.to_string();
  }
  let mut out = String::new();
  let mut width = 0usize;
  for c in text.chars() {
    let w = c.width().unwrap_or(0);
    if width + w > max.saturating_sub(1) {
      break;
    }
    out.push(c);
    width += w;
  }
  out.push('…');
  out
}
