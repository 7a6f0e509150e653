//! Column selector
//!
//! Typed column identifiers plus the legacy `"columnN"` token form.

use std::fmt;
use std::str::FromStr;

use crate::error::{QueryError, Result};

/// Character position inside a `"columnN"` token that holds the column digit
pub const DISCRIMINANT_OFFSET: usize = 6;

/// One of the four logical columns of a `Record`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `id`, column0
    Id,
    /// `field_a`, column1
    FieldA,
    /// `field_b`, column2
    FieldB,
    /// `field_c`, column3
    FieldC,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Id, Column::FieldA, Column::FieldB, Column::FieldC];

    /// Map a discriminant digit to its column
    pub fn from_discriminant(digit: char) -> Option<Column> {
        match digit {
            '0' => Some(Column::Id),
            '1' => Some(Column::FieldA),
            '2' => Some(Column::FieldB),
            '3' => Some(Column::FieldC),
            _ => None,
        }
    }

    /// Resolve a textual selector by its single discriminant character
    ///
    /// Only the character at `DISCRIMINANT_OFFSET` is inspected, so
    /// `"column2"` and `"field_2"` both select `FieldB`. A selector too
    /// short to hold that character is an error; an unrecognised digit
    /// yields `Ok(None)`.
    pub fn from_selector(selector: &str) -> Result<Option<Column>> {
        let digit = Self::discriminant(selector)?;
        Ok(Self::from_discriminant(digit))
    }

    /// Read the discriminant character of a selector
    pub fn discriminant(selector: &str) -> Result<char> {
        selector
            .chars()
            .nth(DISCRIMINANT_OFFSET)
            .ok_or_else(|| QueryError::InvalidSelector {
                selector: selector.to_string(),
            })
    }

    /// Canonical token for this column
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "column0",
            Column::FieldA => "column1",
            Column::FieldB => "column2",
            Column::FieldC => "column3",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = QueryError;

    /// Strict variant of `from_selector`: an unknown digit is an error
    fn from_str(s: &str) -> Result<Self> {
        let digit = Self::discriminant(s)?;
        Self::from_discriminant(digit).ok_or_else(|| QueryError::UnknownColumn {
            selector: s.to_string(),
            discriminant: digit,
        })
    }
}
