//! Utilities: logging setup and input validation

pub mod logger;
pub mod validation;

pub use logger::{cleanup_old_logs, init_logger_with_file};
