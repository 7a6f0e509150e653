//! Column Selector Tests
//!
//! Tests verify:
//! - Discriminant lookup at the fixed offset
//! - Short selector rejection
//! - Unknown digit handling
//! - Display / FromStr

use recordscan::query::DISCRIMINANT_OFFSET;
use recordscan::{Column, QueryError};

// =============================================================================
// Selector Resolution Tests
// =============================================================================

#[test]
fn test_canonical_selectors() {
    assert_eq!(Column::from_selector("column0").unwrap(), Some(Column::Id));
    assert_eq!(Column::from_selector("column1").unwrap(), Some(Column::FieldA));
    assert_eq!(Column::from_selector("column2").unwrap(), Some(Column::FieldB));
    assert_eq!(Column::from_selector("column3").unwrap(), Some(Column::FieldC));
}

#[test]
fn test_only_discriminant_is_inspected() {
    assert_eq!(Column::from_selector("xxxxxx2").unwrap(), Some(Column::FieldB));
    assert_eq!(Column::from_selector("column3-and-more").unwrap(), Some(Column::FieldC));
}

#[test]
fn test_unknown_digit_is_none() {
    assert_eq!(Column::from_selector("column4").unwrap(), None);
    assert_eq!(Column::from_selector("columnX").unwrap(), None);
}

#[test]
fn test_short_selector_is_invalid() {
    let err = Column::from_selector("col1").unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidSelector {
            selector: "col1".to_string()
        }
    );

    assert!(Column::from_selector("").is_err());
    assert!(Column::from_selector(&"c".repeat(DISCRIMINANT_OFFSET)).is_err());
}

#[test]
fn test_multibyte_selector_counts_characters() {
    assert_eq!(Column::from_selector("çolumn1").unwrap(), Some(Column::FieldA));
}

// =============================================================================
// Display / FromStr Tests
// =============================================================================

#[test]
fn test_display_uses_canonical_name() {
    assert_eq!(Column::Id.to_string(), "column0");
    assert_eq!(Column::FieldC.to_string(), "column3");
}

#[test]
fn test_from_str_round_trip() {
    for column in Column::ALL {
        assert_eq!(column.to_string().parse::<Column>().unwrap(), column);
    }
}

#[test]
fn test_from_str_rejects_unknown_digit() {
    let err = "column9".parse::<Column>().unwrap_err();
    assert_eq!(
        err,
        QueryError::UnknownColumn {
            selector: "column9".to_string(),
            discriminant: '9'
        }
    );
}
