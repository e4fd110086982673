use thiserror::Error;

/// Failure to turn an uploaded file into a [`common::Replay`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unable to read replay stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid demo container: {0}")]
    InvalidContainer(String),

    #[error("Malformed demo message on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Demo message on line {line} exceeds {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("Demo stream ended without file info, match id unknown")]
    MissingFileInfo,
}

/// A single backend operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<refinery::Error> for StoreError {
    fn from(e: refinery::Error) -> Self {
        StoreError::Migration(e.to_string())
    }
}

/// Reasons an ingestion is refused before anything is written.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Replay [{game_id}] has already been parsed by store [{store}]")]
    Conflict { game_id: u64, store: String },

    #[error("Could not confirm replay [{game_id}] is absent from store [{store}]: {source}")]
    DuplicateCheck {
        game_id: u64,
        store: String,
        #[source]
        source: StoreError,
    },

    #[error("No stores configured")]
    NoStores,
}
