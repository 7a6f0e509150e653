//! Record and DataGenerator Tests
//!
//! Tests verify:
//! - Generated record layout
//! - Sequential, unique ids
//! - Determinism
//! - Value semantics of collections

use std::collections::HashSet;

use recordscan::generator::{populate_dummy_data, FIELD_B_MODULUS};
use recordscan::{Record, RecordCollection};

// =============================================================================
// Generator Tests
// =============================================================================

#[test]
fn test_generates_exact_count() {
    assert_eq!(populate_dummy_data("testdata", 1000).len(), 1000);
    assert_eq!(populate_dummy_data("testdata", 1).len(), 1);
}

#[test]
fn test_record_layout() {
    let data = populate_dummy_data("testdata", 1000);

    assert_eq!(data[0], Record::new(0, "testdata0", 0, "0testdata"));
    assert_eq!(data[500], Record::new(500, "testdata500", 0, "500testdata"));
    assert_eq!(data[999], Record::new(999, "testdata999", 99, "999testdata"));
}

#[test]
fn test_ids_are_sequential_and_unique() {
    let data = populate_dummy_data("p", 250);

    for (i, record) in data.iter().enumerate() {
        assert_eq!(record.id as usize, i);
    }

    let ids: HashSet<u32> = data.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), data.len());
}

#[test]
fn test_field_b_cycles() {
    let data = populate_dummy_data("p", 300);

    for record in &data {
        assert_eq!(record.field_b, i64::from(record.id % FIELD_B_MODULUS));
    }
}

#[test]
fn test_empty_prefix() {
    let data = populate_dummy_data("", 3);
    assert_eq!(data[2], Record::new(2, "2", 2, "2"));
}

#[test]
fn test_deterministic() {
    assert_eq!(populate_dummy_data("abc", 128), populate_dummy_data("abc", 128));
}

// =============================================================================
// Value Semantics Tests
// =============================================================================

#[test]
fn test_cloned_collection_is_independent() {
    let original = populate_dummy_data("p", 5);
    let mut copy: RecordCollection = original.clone();

    copy[0].field_a.push_str("-changed");
    copy.pop();

    assert_eq!(original.len(), 5);
    assert_eq!(original[0].field_a, "p0");
}
