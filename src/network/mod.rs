pub mod api;
pub mod client;

pub use api::ApiError;
pub use client::{ApiClient, ApiWorker};
