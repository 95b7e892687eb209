//! Core library for shinydex - a read-only backend for a clan's shiny
//! Pokémon showcase site.
//!
//! The pipeline is: published spreadsheet CSV export -> [`csv::parse`] ->
//! per-source loader on [`sheets::SheetClient`] -> typed collection in
//! [`models`] -> derived views in [`summaries`]. Nothing is cached or
//! persisted; every load produces a fresh snapshot.

pub mod config;
pub mod csv;
pub mod models;
pub mod names;
pub mod sheets;
pub mod sprites;
pub mod summaries;

pub use config::SourceUrls;
pub use sheets::{SheetClient, SheetError, Snapshot};
