use docdex_api::{ApiClient, ApiError, FileItem, IngestReport, PickedDirectory, UploadSource};

/// The backend operations the session workflows suspend on.
///
/// [`ApiClient`] is the production implementation; tests drive the
/// workflows with scripted stubs so no network is involved.
#[allow(async_fn_in_trait)]
pub trait IndexService {
  async fn list_files(&self) -> Result<Vec<FileItem>, ApiError>;
  async fn search(&self, query: &str) -> Result<Vec<FileItem>, ApiError>;
  async fn upload(&self, source: UploadSource) -> Result<FileItem, ApiError>;
  async fn ingest_directory(&self, path: &str) -> Result<IngestReport, ApiError>;
  async fn open_file(&self, path: &str) -> Result<(), ApiError>;
  async fn pick_directory(&self) -> Result<PickedDirectory, ApiError>;
}

impl IndexService for ApiClient {
  async fn list_files(&self) -> Result<Vec<FileItem>, ApiError> {
    ApiClient::list_files(self).await
  }

  async fn search(&self, query: &str) -> Result<Vec<FileItem>, ApiError> {
    ApiClient::search(self, query).await
  }

  async fn upload(&self, source: UploadSource) -> Result<FileItem, ApiError> {
    ApiClient::upload(self, source).await
  }

  async fn ingest_directory(&self, path: &str) -> Result<IngestReport, ApiError> {
    ApiClient::ingest_directory(self, path).await
  }

  async fn open_file(&self, path: &str) -> Result<(), ApiError> {
    ApiClient::open_file(self, path).await
  }

  async fn pick_directory(&self) -> Result<PickedDirectory, ApiError> {
    ApiClient::pick_directory(self).await
  }
}
