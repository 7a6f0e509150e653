//! # recordscan
//!
//! A minimal in-memory record query engine with:
//! - Fixed four-column records with a unique id
//! - Per-column match semantics (exact numeric, exact text, substring)
//! - Stable, copy-out filtering in a single linear pass
//! - In-place deletion by id
//! - Deterministic dummy data generation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DataGenerator                           │
//! │              populate_dummy_data(prefix, n)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  RecordCollection
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     QueryEngine                              │
//! │          (Column dispatch, UnknownColumnPolicy)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Find     │          │   Delete    │
//!   │  (&[Record])│          │ (&mut Vec)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use recordscan::{populate_dummy_data, find_matching_records, delete_record_by_id, Column};
//!
//! let mut data = populate_dummy_data("testdata", 1000);
//! let hits = find_matching_records(&data, Column::FieldB, "24").unwrap();
//! assert_eq!(hits.len(), 10);
//!
//! delete_record_by_id(&mut data, 314);
//! assert!(find_matching_records(&data, Column::Id, "314").unwrap().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod generator;
pub mod query;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{QueryError, Result};
pub use config::{Config, UnknownColumnPolicy};
pub use record::{Record, RecordCollection};
pub use generator::populate_dummy_data;
pub use query::{
    delete_record_by_id, find_matching_records, Column, QueryCommand, QueryEngine, QueryOutcome,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recordscan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
