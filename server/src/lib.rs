pub mod api;
pub mod config;
pub mod decoder;
pub mod error;
pub mod ingest;
pub mod store;

pub use error::{DecodeError, IngestError, StoreError};
pub use ingest::{IngestReport, RecordKind, WriteOutcome, ingest_replay};
pub use store::{Store, StoreSet};
