//! Record data model
//!
//! A fixed four-column record and the ordered collection queries run over.

/// One fixed-schema row
///
/// `id` is the primary key and must be unique within a collection.
/// Nothing is enforced for the payload fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Unique identifier (column0)
    pub id: u32,

    /// Text payload (column1), matched exactly
    pub field_a: String,

    /// Signed integer payload (column2), matched exactly
    pub field_b: i64,

    /// Text payload (column3), matched by substring
    pub field_c: String,
}

impl Record {
    pub fn new(id: u32, field_a: impl Into<String>, field_b: i64, field_c: impl Into<String>) -> Self {
        Self {
            id,
            field_a: field_a.into(),
            field_b,
            field_c: field_c.into(),
        }
    }
}

/// Ordered sequence of records, kept in insertion order
pub type RecordCollection = Vec<Record>;
