use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use crate::utils::FeedError;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_MAX_ITEMS: usize = 200;
pub const DEFAULT_LATENCY_MS: u64 = 500;
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.4;

/// Feed tuning, overridable through the environment (or `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub page_size: usize,
    pub max_items: usize,
    pub latency: Duration,
    pub end_reached_threshold: f64,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            page_size: DEFAULT_PAGE_SIZE,
            max_items: DEFAULT_MAX_ITEMS,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Read `FEED_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self, FeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FeedConfig::default();

        let config = FeedConfig {
            page_size: parse_var(&lookup, "FEED_PAGE_SIZE")?.unwrap_or(defaults.page_size),
            max_items: parse_var(&lookup, "FEED_MAX_ITEMS")?.unwrap_or(defaults.max_items),
            latency: parse_var::<u64, _>(&lookup, "FEED_LATENCY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.latency),
            end_reached_threshold: parse_var(&lookup, "FEED_END_REACHED_THRESHOLD")?
                .unwrap_or(defaults.end_reached_threshold),
            seed: parse_var(&lookup, "FEED_SEED")?,
        };

        config.validate()?;
        debug!("Loaded feed config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FeedError> {
        if self.page_size == 0 {
            return Err(invalid("FEED_PAGE_SIZE", self.page_size));
        }
        if self.max_items == 0 {
            return Err(invalid("FEED_MAX_ITEMS", self.max_items));
        }
        if !(self.end_reached_threshold > 0.0 && self.end_reached_threshold <= 1.0) {
            return Err(invalid("FEED_END_REACHED_THRESHOLD", self.end_reached_threshold));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, FeedError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid(key, raw)),
    }
}

fn invalid(key: &str, value: impl ToString) -> FeedError {
    FeedError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
