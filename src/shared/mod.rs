// Shared kernel: config, errors and utilities used by every module

pub mod config;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
