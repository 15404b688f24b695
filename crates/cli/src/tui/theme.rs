use ratatui::style::Color;

/// Catppuccin-inspired theme colors
pub struct Theme;

impl Theme {
  // Base colors
  pub const BG: Color = Color::Rgb(30, 30, 46); // Base
  pub const SURFACE: Color = Color::Rgb(49, 50, 68); // Surface0
  pub const OVERLAY: Color = Color::Rgb(69, 71, 90); // Surface1
  pub const TEXT: Color = Color::Rgb(205, 214, 244); // Text
  pub const SUBTEXT: Color = Color::Rgb(166, 173, 200); // Subtext0
  pub const MUTED: Color = Color::Rgb(108, 112, 134); // Overlay1

  // Accent colors
  pub const ACCENT: Color = Color::Rgb(137, 180, 250); // Blue
  pub const SUCCESS: Color = Color::Rgb(166, 227, 161); // Green
  pub const WARNING: Color = Color::Rgb(249, 226, 175); // Yellow
  pub const ERROR: Color = Color::Rgb(243, 139, 168); // Red
  pub const MATCH: Color = Color::Rgb(249, 226, 175); // Yellow

  /// Badge color for a file type tag
  pub fn file_type_color(file_type: &str) -> Color {
    match file_type.to_lowercase().as_str() {
      "pdf" => Color::Rgb(243, 139, 168),                   // Red
      "md" | "markdown" | "txt" => Color::Rgb(203, 166, 247), // Mauve
      "doc" | "docx" | "odt" => Color::Rgb(137, 180, 250),  // Blue
      "html" | "htm" => Color::Rgb(250, 179, 135),          // Peach
      "csv" | "xls" | "xlsx" => Color::Rgb(166, 227, 161),  // Green
      _ => Self::SUBTEXT,
    }
  }
}
