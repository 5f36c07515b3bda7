pub mod config_service;
pub mod logging;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::paths::RuyaPaths;
