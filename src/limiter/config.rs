use std::time::Duration;

use serde::Deserialize;

use super::bucket_limiter::BucketLimiter;
use super::error::LimiterError;

pub const ENV_PREFIX: &str = "BUCKET_LIMITER_";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LimiterConfig {
    pub fill_interval_ms: u64,
    pub capacity: usize,
}

impl LimiterConfig {
    /// Reads `BUCKET_LIMITER_FILL_INTERVAL_MS` and `BUCKET_LIMITER_CAPACITY`.
    pub fn from_env() -> Result<Self, LimiterError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<LimiterConfig>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, LimiterError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, LimiterConfig>(vars)?)
    }

    pub fn build(&self) -> Result<BucketLimiter, LimiterError> {
        BucketLimiter::new(Duration::from_millis(self.fill_interval_ms), self.capacity)
    }
}

impl BucketLimiter {
    pub fn from_env() -> Result<BucketLimiter, LimiterError> {
        LimiterConfig::from_env()?.build()
    }
}
