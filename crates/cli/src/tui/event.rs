use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the TUI can perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  /// Quit the application
  Quit,
  /// Move selection up
  NavigateUp,
  /// Move selection down
  NavigateDown,
  /// Open the selected result
  Select,
  /// Go back / close overlay (Escape)
  Back,
  /// Open the ingestion panel
  OpenIngest,
  /// Focus the search query input
  FocusSearch,
  /// Submit the focused input
  Submit,
  /// Character input
  Input(char),
  /// Delete character in input
  DeleteChar,
  /// Switch between panel fields
  NextField,
  /// Ask the backend for its native directory chooser
  PickDirectory,
  /// Jump to first result
  GoToTop,
  /// Jump to last result
  GoToBottom,
  /// No action
  None,
}

/// Convert a key event to an action based on whether an input field has
/// focus.
pub fn key_to_action(key: KeyEvent, in_input_mode: bool) -> Action {
  if in_input_mode {
    return match key.code {
      KeyCode::Esc => Action::Back,
      KeyCode::Enter => Action::Submit,
      KeyCode::Backspace => Action::DeleteChar,
      KeyCode::Tab => Action::NextField,
      KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PickDirectory,
      KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
      KeyCode::Char(c) => Action::Input(c),
      _ => Action::None,
    };
  }

  match key.code {
    KeyCode::Char('q') => Action::Quit,
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
    KeyCode::Char('/') | KeyCode::Char('i') => Action::FocusSearch,
    KeyCode::Char('a') => Action::OpenIngest,
    KeyCode::Char('j') | KeyCode::Down => Action::NavigateDown,
    KeyCode::Char('k') | KeyCode::Up => Action::NavigateUp,
    KeyCode::Char('g') => Action::GoToTop,
    KeyCode::Char('G') => Action::GoToBottom,
    KeyCode::Enter => Action::Select,
    KeyCode::Esc => Action::Back,
    KeyCode::Tab => Action::NextField,
    _ => Action::None,
  }
}
