//! End-to-end workflow tests driven through a scripted stub service.
//!
//! These cover the aggregation and state rules of the ingestion and shell
//! workflows without a backend: each stub method pops the next scripted
//! outcome and records the call for ordering assertions.

use chrono::Utc;
use docdex_api::{ApiError, FileItem, IngestReport, PickedDirectory, UploadSource};
use docdex_session::{IndexService, Ingestor, SearchSession, Shell, StatusKind};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;

#[derive(Default)]
struct StubService {
  uploads: RefCell<VecDeque<Result<FileItem, ApiError>>>,
  ingests: RefCell<VecDeque<Result<IngestReport, ApiError>>>,
  opens: RefCell<VecDeque<Result<(), ApiError>>>,
  searches: RefCell<VecDeque<Result<Vec<FileItem>, ApiError>>>,
  calls: RefCell<Vec<String>>,
}

impl StubService {
  fn on_upload(self, outcome: Result<FileItem, ApiError>) -> Self {
    self.uploads.borrow_mut().push_back(outcome);
    self
  }

  fn on_ingest(self, outcome: Result<IngestReport, ApiError>) -> Self {
    self.ingests.borrow_mut().push_back(outcome);
    self
  }

  fn on_open(self, outcome: Result<(), ApiError>) -> Self {
    self.opens.borrow_mut().push_back(outcome);
    self
  }

  fn on_search(self, outcome: Result<Vec<FileItem>, ApiError>) -> Self {
    self.searches.borrow_mut().push_back(outcome);
    self
  }

  fn calls(&self) -> Vec<String> {
    self.calls.borrow().clone()
  }
}

impl IndexService for StubService {
  async fn list_files(&self) -> Result<Vec<FileItem>, ApiError> {
    self.calls.borrow_mut().push("list".to_string());
    Ok(vec![])
  }

  async fn search(&self, query: &str) -> Result<Vec<FileItem>, ApiError> {
    self.calls.borrow_mut().push(format!("search:{query}"));
    self.searches.borrow_mut().pop_front().expect("unscripted search")
  }

  async fn upload(&self, source: UploadSource) -> Result<FileItem, ApiError> {
    self.calls.borrow_mut().push(format!("upload:{}", source.name));
    self.uploads.borrow_mut().pop_front().expect("unscripted upload")
  }

  async fn ingest_directory(&self, path: &str) -> Result<IngestReport, ApiError> {
    self.calls.borrow_mut().push(format!("ingest:{path}"));
    self.ingests.borrow_mut().pop_front().expect("unscripted ingest")
  }

  async fn open_file(&self, path: &str) -> Result<(), ApiError> {
    self.calls.borrow_mut().push(format!("open:{path}"));
    self.opens.borrow_mut().pop_front().expect("unscripted open")
  }

  async fn pick_directory(&self) -> Result<PickedDirectory, ApiError> {
    self.calls.borrow_mut().push("pick".to_string());
    Ok(PickedDirectory { path: None })
  }
}

fn item(id: i64, name: &str) -> FileItem {
  FileItem {
    id,
    name: name.to_string(),
    path: format!("/srv/media/{name}"),
    file_type: "txt".to_string(),
    size: 1,
    created_at: Utc::now(),
    snippet: None,
  }
}

fn source(name: &str) -> UploadSource {
  UploadSource::new(name, b"content".to_vec())
}

fn rejection(message: &str) -> ApiError {
  ApiError::Service {
    status: 400,
    message: message.to_string(),
  }
}

#[tokio::test]
async fn partial_upload_failure_still_reports_success() {
  let service = StubService::default()
    .on_upload(Ok(item(1, "a.pdf")))
    .on_upload(Err(rejection("too large")));
  let mut ingestor = Ingestor::new();

  ingestor
    .upload_files(&service, vec![source("a.pdf"), source("b.txt")])
    .await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Success);
  assert_eq!(status.message, "Successfully uploaded 1 files.");
  assert_eq!(status.errors, vec!["Failed to upload b.txt: too large"]);
  assert!(!ingestor.loading);
}

#[tokio::test]
async fn all_uploads_failing_reports_error() {
  let service = StubService::default()
    .on_upload(Err(rejection("unsupported type")))
    .on_upload(Err(ApiError::Transport("connection refused".into())));
  let mut ingestor = Ingestor::new();

  ingestor
    .upload_files(&service, vec![source("a.exe"), source("b.txt")])
    .await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Error);
  assert_eq!(status.message, "Failed to upload files.");
  assert_eq!(
    status.errors,
    vec![
      "Failed to upload a.exe: unsupported type",
      "Failed to upload b.txt: connection refused",
    ]
  );
  assert!(!ingestor.loading);
}

#[tokio::test]
async fn uploads_run_sequentially_in_input_order() {
  let service = StubService::default()
    .on_upload(Err(rejection("nope")))
    .on_upload(Ok(item(1, "b.md")))
    .on_upload(Err(rejection("still no")));
  let mut ingestor = Ingestor::new();

  ingestor
    .upload_files(&service, vec![source("a.md"), source("b.md"), source("c.md")])
    .await;

  assert_eq!(service.calls(), vec!["upload:a.md", "upload:b.md", "upload:c.md"]);
  let status = ingestor.status.expect("status set");
  assert_eq!(
    status.errors,
    vec!["Failed to upload a.md: nope", "Failed to upload c.md: still no"]
  );
}

#[tokio::test]
async fn empty_batch_reports_nothing() {
  let service = StubService::default();
  let mut ingestor = Ingestor::new();

  ingestor.upload_files(&service, vec![]).await;

  assert!(ingestor.status.is_none());
  assert!(!ingestor.loading);
  assert!(service.calls().is_empty());
}

#[tokio::test]
async fn new_workflow_replaces_prior_status() {
  let service = StubService::default()
    .on_ingest(Err(rejection("Directory not found")))
    .on_upload(Ok(item(1, "a.txt")));
  let mut ingestor = Ingestor::new();

  ingestor.ingest_directory(&service, "/missing").await;
  assert_eq!(ingestor.status.as_ref().unwrap().kind, StatusKind::Error);

  ingestor.upload_files(&service, vec![source("a.txt")]).await;
  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Success);
  assert_eq!(status.message, "Successfully uploaded 1 files.");
}

#[tokio::test]
async fn unreadable_file_fails_soft_in_order() {
  let dir = tempfile::tempdir().unwrap();
  let readable = dir.path().join("real.txt");
  let mut file = std::fs::File::create(&readable).unwrap();
  file.write_all(b"hello").unwrap();
  let missing = dir.path().join("ghost.txt");

  let service = StubService::default().on_upload(Ok(item(1, "real.txt")));
  let mut ingestor = Ingestor::new();

  ingestor.upload_paths(&service, &[missing, readable]).await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Success);
  assert_eq!(status.message, "Successfully uploaded 1 files.");
  assert_eq!(status.errors.len(), 1);
  assert!(status.errors[0].starts_with("Failed to upload ghost.txt:"));
  // Only the readable file ever reached the service.
  assert_eq!(service.calls(), vec!["upload:real.txt"]);
}

#[tokio::test]
async fn blank_ingest_path_never_touches_the_network() {
  let service = StubService::default().on_ingest(Ok(IngestReport {
    status: "success".to_string(),
    count: 2,
    errors: vec![],
  }));
  let mut ingestor = Ingestor::new();

  ingestor.ingest_directory(&service, "/docs").await;
  let before = ingestor.status.clone().expect("status set");
  let calls_before = service.calls().len();

  ingestor.ingest_directory(&service, "   ").await;
  ingestor.ingest_directory(&service, "").await;

  assert_eq!(service.calls().len(), calls_before);
  assert_eq!(ingestor.status.as_ref().unwrap().message, before.message);
  assert!(!ingestor.loading);
}

#[tokio::test]
async fn directory_ingest_keeps_item_errors_on_success() {
  let service = StubService::default().on_ingest(Ok(IngestReport {
    status: "success".to_string(),
    count: 5,
    errors: vec!["bad.exe: unsupported type".to_string()],
  }));
  let mut ingestor = Ingestor::new();

  ingestor.ingest_directory(&service, "/docs").await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Success);
  assert_eq!(status.message, "Successfully processed 5 files.");
  assert_eq!(status.processed, Some(5));
  assert_eq!(status.errors, vec!["bad.exe: unsupported type"]);
}

#[tokio::test]
async fn directory_ingest_failure_prefers_service_message() {
  let service = StubService::default().on_ingest(Err(ApiError::Service {
    status: 404,
    message: "Directory not found".to_string(),
  }));
  let mut ingestor = Ingestor::new();

  ingestor.ingest_directory(&service, "/nope").await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Error);
  assert_eq!(status.message, "Directory not found");
  assert!(!ingestor.loading);
}

#[tokio::test]
async fn directory_ingest_transport_failure_gets_generic_message() {
  let service = StubService::default().on_ingest(Err(ApiError::Transport("backend down".into())));
  let mut ingestor = Ingestor::new();

  ingestor.ingest_directory(&service, "/docs").await;

  let status = ingestor.status.expect("status set");
  assert_eq!(status.kind, StatusKind::Error);
  assert_eq!(status.message, "Failed to ingest files.");
}

#[tokio::test]
async fn closing_the_panel_clears_the_status() {
  let service = StubService::default().on_ingest(Ok(IngestReport {
    status: "success".to_string(),
    count: 1,
    errors: vec![],
  }));
  let mut shell = Shell::new();

  shell.open_ingest();
  assert!(shell.ingest_open());
  shell.ingest.ingest_directory(&service, "/docs").await;
  assert!(shell.ingest.status.is_some());

  shell.close_ingest();
  assert!(!shell.ingest_open());
  assert!(shell.ingest.status.is_none());
}

#[tokio::test]
async fn open_failure_raises_a_notice_until_acknowledged() {
  let service = StubService::default()
    .on_open(Err(rejection("File not found")))
    .on_open(Ok(()));
  let mut shell = Shell::new();

  shell.open_item(&service, "/srv/media/gone.pdf").await;
  let notice = shell.notice().expect("notice raised");
  assert!(notice.contains("/srv/media/gone.pdf"));
  assert!(notice.contains("File not found"));

  shell.acknowledge();
  assert!(shell.notice().is_none());

  shell.open_item(&service, "/srv/media/fine.pdf").await;
  assert!(shell.notice().is_none());
}

#[tokio::test]
async fn submit_runs_one_search_through_the_service() {
  let service = StubService::default().on_search(Ok(vec![item(1, "hit.md")]));
  let mut session = SearchSession::new();
  session.query = "  hit  ".to_string();

  session.submit(&service).await;

  assert_eq!(service.calls(), vec!["search:hit"]);
  assert_eq!(session.results().len(), 1);
  assert!(session.has_searched());
}

#[tokio::test]
async fn blank_submit_never_calls_the_service() {
  let service = StubService::default();
  let mut session = SearchSession::new();
  session.query = "   ".to_string();

  session.submit(&service).await;

  assert!(service.calls().is_empty());
  assert!(!session.has_searched());
}
