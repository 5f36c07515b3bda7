use anyhow::Result;

use ruya_core::config::RuyaConfig;
use ruya_infrastructure::ConfigService;

pub fn path(service: &ConfigService) {
    println!("{}", service.path().display());
}

/// Prints the effective configuration as TOML.
pub fn show(config: &RuyaConfig) -> Result<()> {
    print!("{}", ConfigService::render(config)?);
    Ok(())
}
