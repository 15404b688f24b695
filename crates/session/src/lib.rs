//! Client-side workflows for the docdex index: ingestion orchestration,
//! search session state, and the shell that composes them for a frontend.
//!
//! Everything here is single-threaded, event-driven state. Suspension
//! points are exactly the [`IndexService`] calls; no resource is held
//! across one beyond the outstanding request itself.

mod ingest;
mod search;
mod service;
mod shell;
mod snippet;

pub use ingest::{IngestStatus, Ingestor, StatusKind};
pub use search::{SearchSession, SearchTicket};
pub use service::IndexService;
pub use shell::Shell;
pub use snippet::{SnippetSpan, decode_snippet, snippet_plain};
