pub mod browser;
pub mod config;
pub mod document;
pub mod error;
pub mod role;
pub mod session;

// Re-export common error type
pub use error::{Result, RuyaError};
