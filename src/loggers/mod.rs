pub mod debug_logger;
pub mod stats_logger;
