use thiserror::Error;

#[derive(Debug, Error)]
pub enum LimiterError {
    #[error("Invalid limiter config: {0}")]
    InvalidConfig(String),

    #[error("Malformed environment config: {0}")]
    Env(#[from] envy::Error),
}
