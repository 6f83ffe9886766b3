use anyhow::Result;
use log::debug;

use crate::platform::{Platform, PlatformDetector, UserAgentDetector};

use super::config::Config;

/// Print the platform recommended for the configured user agent.
#[tracing::instrument(skip(config))]
pub fn detect(config: &Config) -> Result<()> {
    let platform = detected_platform(config);
    println!("{}", platform);
    println!("{}", platform.download_label());
    Ok(())
}

pub(crate) fn detected_platform(config: &Config) -> Platform {
    debug!("Classifying user agent {:?}", config.user_agent);
    UserAgentDetector::new(Some(&config.user_agent)).detect()
}
