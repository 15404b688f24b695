use thiserror::Error;

/// Failure of a single backend call.
///
/// Both variants are terminal for the call that produced them; callers
/// decide whether to surface, aggregate, or log them.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The backend could not be reached, timed out, or sent an unreadable
  /// response.
  #[error("transport error: {0}")]
  Transport(String),

  /// The backend answered with a non-success status.
  #[error("service error ({status}): {message}")]
  Service { status: u16, message: String },
}

impl ApiError {
  pub fn is_transport(&self) -> bool {
    matches!(self, ApiError::Transport(_))
  }

  /// The human-readable part of the error, without the kind prefix.
  pub fn message(&self) -> &str {
    match self {
      ApiError::Transport(message) => message,
      ApiError::Service { message, .. } => message,
    }
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(error: reqwest::Error) -> Self {
    ApiError::Transport(error.to_string())
  }
}
