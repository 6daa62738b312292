pub mod bucket_limiter;
pub mod config;
pub mod error;

pub use bucket_limiter::BucketLimiter;
pub use config::LimiterConfig;
pub use error::LimiterError;
