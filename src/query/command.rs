//! Command definitions
//!
//! Requests routed through `QueryEngine::execute`.

use crate::record::{Record, RecordCollection};

use super::Column;

/// A query request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Find records on a typed column
    Find { column: Column, value: String },

    /// Find records on a textual `"columnN"` selector
    FindBySelector { selector: String, value: String },

    /// Remove the record with this id
    Delete { id: u32 },
}

/// Result of executing a `QueryCommand`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Records matched by a find, in original order
    Matches(RecordCollection),

    /// Record removed by a delete, `None` when the id was absent
    Deleted(Option<Record>),
}
