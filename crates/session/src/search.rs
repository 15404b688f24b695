//! Search session state: query, in-flight tracking, and results.

use crate::IndexService;
use docdex_api::{ApiError, FileItem};
use tracing::{debug, warn};

/// Ties an in-flight search to the submission that started it.
///
/// A later submission supersedes earlier ones; a resolution carrying a
/// stale ticket is dropped instead of overwriting newer results, so the
/// displayed results always belong to the last query the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
  pub query: String,
  generation: u64,
}

/// One user's search session against the index.
///
/// Results keep the backend's relevance order; they are never re-sorted
/// here. `has_searched` gates the "no results" presentation so it cannot
/// appear before the first search has resolved.
#[derive(Debug, Default)]
pub struct SearchSession {
  pub query: String,
  results: Vec<FileItem>,
  loading: bool,
  has_searched: bool,
  generation: u64,
}

impl SearchSession {
  pub fn new() -> Self {
    Self::default()
  }

  /// Start a search for the current query.
  ///
  /// Blank input is a no-op. Submitting while another search is in flight
  /// supersedes it: the earlier resolution will arrive with a stale
  /// ticket and be dropped.
  pub fn begin(&mut self) -> Option<SearchTicket> {
    let query = self.query.trim();
    if query.is_empty() {
      return None;
    }
    self.generation += 1;
    self.loading = true;
    debug!(query, generation = self.generation, "search submitted");
    Some(SearchTicket {
      query: query.to_string(),
      generation: self.generation,
    })
  }

  /// Apply a search outcome.
  ///
  /// Stale tickets are dropped wholesale. A current failure only turns
  /// the loading indicator off: earlier results stay on screen and the
  /// error goes to the log, not the user.
  pub fn finish(&mut self, ticket: SearchTicket, outcome: Result<Vec<FileItem>, ApiError>) {
    if ticket.generation != self.generation {
      debug!(query = %ticket.query, "dropping superseded search outcome");
      return;
    }
    self.loading = false;
    match outcome {
      Ok(results) => {
        debug!(query = %ticket.query, hits = results.len(), "search resolved");
        self.results = results;
        self.has_searched = true;
      }
      Err(error) => {
        warn!(query = %ticket.query, %error, "search failed");
      }
    }
  }

  /// Begin, call the service, finish. For shells that submit inline.
  pub async fn submit<S: IndexService>(&mut self, service: &S) {
    let Some(ticket) = self.begin() else { return };
    let outcome = service.search(&ticket.query).await;
    self.finish(ticket, outcome);
  }

  pub fn results(&self) -> &[FileItem] {
    &self.results
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn has_searched(&self) -> bool {
    self.has_searched
  }

  /// True once a completed search came back empty.
  pub fn no_matches(&self) -> bool {
    self.has_searched && !self.loading && self.results.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn item(id: i64, name: &str) -> FileItem {
    FileItem {
      id,
      name: name.to_string(),
      path: format!("/srv/media/{name}"),
      file_type: "txt".to_string(),
      size: 42,
      created_at: Utc::now(),
      snippet: None,
    }
  }

  #[test]
  fn blank_query_is_a_no_op() {
    let mut session = SearchSession::new();
    session.query = "   ".to_string();
    assert!(session.begin().is_none());
    assert!(!session.is_loading());
    assert!(!session.has_searched());
  }

  #[test]
  fn empty_result_set_is_distinct_from_failure() {
    let mut session = SearchSession::new();
    session.query = "report".to_string();

    let ticket = session.begin().unwrap();
    assert!(session.is_loading());
    session.finish(ticket, Ok(vec![]));

    assert!(session.has_searched());
    assert!(session.results().is_empty());
    assert!(session.no_matches());
  }

  #[test]
  fn failure_preserves_prior_results() {
    let mut session = SearchSession::new();
    session.query = "alpha".to_string();
    let ticket = session.begin().unwrap();
    session.finish(ticket, Ok(vec![item(1, "alpha.txt"), item(2, "alpha.md")]));

    session.query = "beta".to_string();
    let ticket = session.begin().unwrap();
    session.finish(ticket, Err(ApiError::Transport("connection refused".into())));

    assert!(!session.is_loading());
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.results()[0].name, "alpha.txt");
    assert!(!session.no_matches());
  }

  #[test]
  fn result_order_is_the_services_order() {
    let mut session = SearchSession::new();
    session.query = "notes".to_string();
    let ticket = session.begin().unwrap();
    session.finish(ticket, Ok(vec![item(9, "zeta.txt"), item(1, "alpha.txt")]));

    let names: Vec<_> = session.results().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["zeta.txt", "alpha.txt"]);
  }

  #[test]
  fn later_submission_supersedes_earlier_one() {
    let mut session = SearchSession::new();
    session.query = "first".to_string();
    let first = session.begin().unwrap();

    session.query = "second".to_string();
    let second = session.begin().unwrap();

    // The first search resolves late; its outcome must not win.
    session.finish(first, Ok(vec![item(1, "stale.txt")]));
    assert!(session.is_loading());
    assert!(session.results().is_empty());
    assert!(!session.has_searched());

    session.finish(second, Ok(vec![item(2, "fresh.txt")]));
    assert!(!session.is_loading());
    assert_eq!(session.results()[0].name, "fresh.txt");
  }

  #[test]
  fn stale_failure_does_not_clear_loading() {
    let mut session = SearchSession::new();
    session.query = "first".to_string();
    let first = session.begin().unwrap();
    session.query = "second".to_string();
    let _second = session.begin().unwrap();

    session.finish(first, Err(ApiError::Transport("timed out".into())));
    assert!(session.is_loading());
  }
}
