//! Sheet fetching: HTTP client, per-source loaders, and the fetch error type.

mod client;
mod error;

pub use client::{SheetClient, Snapshot};
pub use error::SheetError;
