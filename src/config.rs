//! Processor configuration, loaded from environment variables with
//! fallback to defaults. Command-line flags override what is loaded here.

use crate::error::{PaymentError, Result};
use std::env;
use tracing_subscriber::EnvFilter;

pub const HISTORY_CAPACITY_VAR: &str = "PAYMATCH_HISTORY_CAPACITY";
pub const LOG_FILTER_VAR: &str = "PAYMATCH_LOG";

pub const DEFAULT_HISTORY_CAPACITY: usize = 256;
/// Warnings from dependencies, plus the crate's own run summary.
pub const DEFAULT_LOG_FILTER: &str = "warn,paymatch=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// How many recent results the history ring buffer retains.
    pub history_capacity: usize,
    /// `tracing-subscriber` env-filter directive.
    pub log_filter: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ProcessorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(HISTORY_CAPACITY_VAR) {
            config.history_capacity = parse_capacity(&raw)?;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR)
            && !filter.trim().is_empty()
        {
            config.log_filter = parse_log_filter(&filter)?;
        }
        Ok(config)
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(PaymentError::Config(format!(
                "{HISTORY_CAPACITY_VAR} must be at least 1"
            )));
        }
        self.history_capacity = capacity;
        Ok(self)
    }
}

fn parse_capacity(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(PaymentError::Config(format!(
            "{HISTORY_CAPACITY_VAR} must be a positive integer, got {raw:?}"
        ))),
    }
}

fn parse_log_filter(raw: &str) -> Result<String> {
    EnvFilter::try_new(raw).map_err(|e| {
        PaymentError::Config(format!("{LOG_FILTER_VAR} is not a valid filter ({raw:?}): {e}"))
    })?;
    Ok(raw.to_string())
}
