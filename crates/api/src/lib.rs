//! Typed HTTP boundary to the docdex backend.
//!
//! Every indexing concern (storage, extraction, search ranking, directory
//! traversal) lives behind the backend's REST surface; this crate only
//! translates between typed calls and that surface. No retries, no caching.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{FileItem, IngestReport, PickedDirectory, UploadSource};
