pub mod limiter;
pub mod loggers;
pub mod observers;

pub use limiter::{BucketLimiter, LimiterConfig, LimiterError};
