//! Query Module
//!
//! Filtering and deletion over a `RecordCollection`.
//!
//! ## Match Semantics
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────────┐
//! │ Column   │ Field    │ Rule                            │
//! ├──────────┼──────────┼─────────────────────────────────┤
//! │ column0  │ id       │ value parsed as u32, equality   │
//! │ column1  │ field_a  │ exact string equality           │
//! │ column2  │ field_b  │ value parsed as i64, equality   │
//! │ column3  │ field_c  │ substring containment           │
//! └──────────┴──────────┴─────────────────────────────────┘
//! ```
//!
//! Every find is a single stable pass over the input; results are
//! independent copies in original order.

mod column;
mod command;
mod engine;
mod predicate;

pub use column::{Column, DISCRIMINANT_OFFSET};
pub use command::{QueryCommand, QueryOutcome};
pub use engine::{delete_record_by_id, find_matching_records, QueryEngine};
pub use predicate::Predicate;
