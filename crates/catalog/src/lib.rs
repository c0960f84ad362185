//! # Catalog Crate
//!
//! This crate handles loading the film dashboard's CSV tables and owns the
//! domain types shared across the workspace.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (FilmRecord, Catalog, ViewCount, ScoreEntry)
//! - **loader**: Parse the CSV tables into Rust structs
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{DashboardData, loader};
//! use std::path::Path;
//!
//! // Load everything at startup, with per-table outcomes
//! let data = DashboardData::load(Path::new("data"));
//!
//! // Or load just the table a view needs
//! let films = loader::load_catalog(Path::new("data"))?;
//! println!("{} films in catalog", films.len());
//! ```
//!
//! The catalog is read-only after load. Wrap it in an `Arc` to share it
//! across concurrent readers; no locking is required because no writer ever
//! exists after load.

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::DashboardData;
pub use types::{BoundField, Catalog, ChoiceField, FilmRecord, ScoreEntry, ViewCount};
