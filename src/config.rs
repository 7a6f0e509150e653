//! Configuration for recordscan
//!
//! Centralized configuration with sensible defaults.

use crate::error::{QueryError, Result};

/// Main configuration for a query session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Generator Configuration
    // -------------------------------------------------------------------------
    /// Prefix used for the text fields of generated records
    ///   field_a = {prefix}{i}
    ///   field_c = {i}{prefix}
    pub prefix: String,

    /// Number of records to generate
    pub record_count: u32,

    // -------------------------------------------------------------------------
    // Query Configuration
    // -------------------------------------------------------------------------
    /// What a textual selector with an unrecognised column digit yields
    pub unknown_column: UnknownColumnPolicy,
}

/// Handling of textual selectors whose discriminant names no column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownColumnPolicy {
    /// Return an empty result set
    #[default]
    EmptyResult,

    /// Fail with `QueryError::UnknownColumn`
    Reject,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "testdata".to_string(),
            record_count: 1000,
            unknown_column: UnknownColumnPolicy::EmptyResult,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config is usable for generating a dataset
    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(QueryError::Config(
                "record_count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the generator prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the number of generated records
    pub fn record_count(mut self, count: u32) -> Self {
        self.config.record_count = count;
        self
    }

    /// Set the unknown column policy
    pub fn unknown_column(mut self, policy: UnknownColumnPolicy) -> Self {
        self.config.unknown_column = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
