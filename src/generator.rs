//! Synthetic data generation
//!
//! Builds reproducible record collections for tests and benchmarks.

use crate::config::Config;
use crate::record::{Record, RecordCollection};

/// Number of distinct values cycled through by `field_b`
pub const FIELD_B_MODULUS: u32 = 100;

/// Populate a collection with `count` dummy records
///
/// Record `i` is `{ id: i, field_a: prefix + i, field_b: i % 100, field_c: i + prefix }`.
/// Output is fully deterministic.
pub fn populate_dummy_data(prefix: &str, count: u32) -> RecordCollection {
    tracing::trace!(prefix, count, "populating dummy data");

    let mut data = Vec::with_capacity(count as usize);
    for i in 0..count {
        data.push(Record {
            id: i,
            field_a: format!("{prefix}{i}"),
            field_b: i64::from(i % FIELD_B_MODULUS),
            field_c: format!("{i}{prefix}"),
        });
    }
    data
}

/// Generate the dataset described by a config
pub fn generate(config: &Config) -> RecordCollection {
    populate_dummy_data(&config.prefix, config.record_count)
}
