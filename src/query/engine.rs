//! Query engine
//!
//! Column-dispatching filter and id-based deletion.
//!
//! ## Access Model
//! - `find_*` borrow the collection immutably, so any number of readers
//!   may share it across threads.
//! - `delete` takes `&mut`, so the borrow checker guarantees nobody
//!   observes the collection mid-removal.

use tracing::{debug, warn};

use crate::config::{Config, UnknownColumnPolicy};
use crate::error::{QueryError, Result};
use crate::record::{Record, RecordCollection};

use super::{Column, Predicate, QueryCommand, QueryOutcome};

/// Return copies of the records matching `value` on `column`
///
/// Single linear pass, stable order. The match value is only parsed when
/// there is at least one record to test it against, so an empty input
/// always yields an empty result.
pub fn find_matching_records(
    records: &[Record],
    column: Column,
    value: &str,
) -> Result<RecordCollection> {
    if records.is_empty() {
        debug!(%column, "find on empty collection");
        return Ok(Vec::new());
    }

    let predicate = Predicate::parse(column, value)?;

    let matches: RecordCollection = records
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect();

    debug!(
        %column,
        value,
        scanned = records.len(),
        matched = matches.len(),
        "find complete"
    );
    Ok(matches)
}

/// Remove the record with `id`, returning it
///
/// Ids are unique, so the scan stops at the first hit. A missing id leaves
/// the collection untouched.
pub fn delete_record_by_id(records: &mut RecordCollection, id: u32) -> Option<Record> {
    match records.iter().position(|record| record.id == id) {
        Some(index) => {
            let removed = records.remove(index);
            debug!(id, index, remaining = records.len(), "record deleted");
            Some(removed)
        }
        None => {
            debug!(id, "delete found no record");
            None
        }
    }
}

/// Query front-end carrying the session's selector policy
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    unknown_column: UnknownColumnPolicy,
}

impl QueryEngine {
    /// Create an engine from a config
    pub fn new(config: &Config) -> Self {
        Self {
            unknown_column: config.unknown_column,
        }
    }

    /// Create an engine with an explicit unknown column policy
    pub fn with_policy(unknown_column: UnknownColumnPolicy) -> Self {
        Self { unknown_column }
    }

    pub fn policy(&self) -> UnknownColumnPolicy {
        self.unknown_column
    }

    /// Execute a command
    ///
    /// Routes commands to the matching handler. Finds never touch
    /// `records`; deletes mutate it in place.
    pub fn execute(&self, records: &mut RecordCollection, command: QueryCommand) -> Result<QueryOutcome> {
        match command {
            QueryCommand::Find { column, value } => {
                self.find(records, column, &value).map(QueryOutcome::Matches)
            }
            QueryCommand::FindBySelector { selector, value } => self
                .find_by_selector(records, &selector, &value)
                .map(QueryOutcome::Matches),
            QueryCommand::Delete { id } => Ok(QueryOutcome::Deleted(self.delete(records, id))),
        }
    }

    /// Find on a typed column
    pub fn find(&self, records: &[Record], column: Column, value: &str) -> Result<RecordCollection> {
        find_matching_records(records, column, value)
    }

    /// Find on a textual selector such as `"column1"`
    ///
    /// Only the discriminant digit is read. An unrecognised digit is
    /// resolved by the engine's `UnknownColumnPolicy`.
    pub fn find_by_selector(
        &self,
        records: &[Record],
        selector: &str,
        value: &str,
    ) -> Result<RecordCollection> {
        let digit = Column::discriminant(selector)?;

        match Column::from_discriminant(digit) {
            Some(column) => find_matching_records(records, column, value),
            None => match self.unknown_column {
                UnknownColumnPolicy::EmptyResult => {
                    warn!(selector, discriminant = %digit, "unknown column, returning no records");
                    Ok(Vec::new())
                }
                UnknownColumnPolicy::Reject => Err(QueryError::UnknownColumn {
                    selector: selector.to_string(),
                    discriminant: digit,
                }),
            },
        }
    }

    /// Delete by id
    pub fn delete(&self, records: &mut RecordCollection, id: u32) -> Option<Record> {
        delete_record_by_id(records, id)
    }
}
