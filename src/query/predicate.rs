//! Per-column match rules

use crate::error::{QueryError, Result};
use crate::record::Record;

use super::Column;

/// A column match rule with its match value already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `id == n`
    IdEquals(u32),

    /// `field_a == s` (exact, never substring)
    FieldAEquals(String),

    /// `field_b == n`
    FieldBEquals(i64),

    /// `s` occurs somewhere in `field_c`
    FieldCContains(String),
}

impl Predicate {
    /// Build the predicate for `column` from a textual match value
    ///
    /// Numeric columns require the whole value to parse: no whitespace,
    /// no trailing characters.
    pub fn parse(column: Column, value: &str) -> Result<Self> {
        let predicate = match column {
            Column::Id => Predicate::IdEquals(parse_number(column, value)?),
            Column::FieldA => Predicate::FieldAEquals(value.to_string()),
            Column::FieldB => Predicate::FieldBEquals(parse_number(column, value)?),
            Column::FieldC => Predicate::FieldCContains(value.to_string()),
        };
        Ok(predicate)
    }

    /// Column this predicate reads
    pub fn column(&self) -> Column {
        match self {
            Predicate::IdEquals(_) => Column::Id,
            Predicate::FieldAEquals(_) => Column::FieldA,
            Predicate::FieldBEquals(_) => Column::FieldB,
            Predicate::FieldCContains(_) => Column::FieldC,
        }
    }

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::IdEquals(id) => record.id == *id,
            Predicate::FieldAEquals(s) => record.field_a == *s,
            Predicate::FieldBEquals(n) => record.field_b == *n,
            Predicate::FieldCContains(s) => record.field_c.contains(s.as_str()),
        }
    }
}

fn parse_number<T>(column: Column, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse::<T>().map_err(|e| QueryError::Parse {
        column,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
