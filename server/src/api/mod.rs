pub mod error;
pub mod middleware;
pub mod names;
pub mod player;
pub mod replay;
pub mod server;

pub use error::ApiError;
pub use server::{ApiState, MAX_UPLOAD_BYTES, router, run_api_server};
