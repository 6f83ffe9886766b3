use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use log::debug;

/// Desktop operating system family the downloads page personalizes for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    #[default]
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// All platforms in the order the downloads page lists them.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Classify a user-agent string.
    ///
    /// Tokens are tested case-insensitively in fixed priority order:
    /// `mac`, then `linux`, then `win`. Anything else, including an empty
    /// string, is Windows.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        if ua.contains("mac") {
            Platform::MacOs
        } else if ua.contains("linux") {
            Platform::Linux
        } else {
            // "win" and unknown agents both land here
            Platform::Windows
        }
    }

    /// Human readable name, as shown on download buttons.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Label of the primary download button.
    pub fn download_label(&self) -> String {
        format!("Download for {}", self.name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for Platform {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" | "darwin" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => bail!("Unknown platform: {}", other),
        }
    }
}

/// Classify an optional user agent. A missing agent is Windows.
pub fn detect_platform(user_agent: Option<&str>) -> Platform {
    user_agent.map(Platform::from_user_agent).unwrap_or_default()
}

/// Trait for platform detection (useful for testing)
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> Platform;
}

/// Detector bound to the user agent seen when the page was loaded.
///
/// The platform is computed once on construction and never re-evaluated.
#[derive(Debug, Clone)]
pub struct UserAgentDetector {
    platform: Platform,
}

impl UserAgentDetector {
    pub fn new(user_agent: Option<&str>) -> Self {
        let platform = detect_platform(user_agent);
        debug!("Detected platform {} from {:?}", platform, user_agent);
        Self { platform }
    }
}

impl PlatformDetector for UserAgentDetector {
    fn detect(&self) -> Platform {
        self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";
    const EDGE_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0";

    #[test]
    fn test_real_browsers() {
        assert_eq!(Platform::from_user_agent(SAFARI_MAC), Platform::MacOs);
        assert_eq!(Platform::from_user_agent(FIREFOX_LINUX), Platform::Linux);
        assert_eq!(Platform::from_user_agent(EDGE_WINDOWS), Platform::Windows);
    }

    #[test]
    fn test_mac_wins_over_other_tokens() {
        assert_eq!(Platform::from_user_agent("linux mac win"), Platform::MacOs);
        assert_eq!(Platform::from_user_agent("Windows; MAC"), Platform::MacOs);
        assert_eq!(Platform::from_user_agent("xLiNuXmAcx"), Platform::MacOs);
    }

    #[test]
    fn test_linux_wins_over_windows() {
        assert_eq!(Platform::from_user_agent("Windows on LINUX"), Platform::Linux);
    }

    #[test]
    fn test_windows_and_fallback() {
        assert_eq!(Platform::from_user_agent("WinNT"), Platform::Windows);
        assert_eq!(Platform::from_user_agent(""), Platform::Windows);
        assert_eq!(Platform::from_user_agent("curl/8.4.0"), Platform::Windows);
        assert_eq!(detect_platform(None), Platform::Windows);
    }

    #[test]
    fn test_android_reports_linux() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
        assert_eq!(Platform::from_user_agent(ua), Platform::Linux);
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(Platform::MacOs.to_string(), "macOS");
        assert_eq!(Platform::Linux.download_label(), "Download for Linux");
        assert_eq!(Platform::default(), Platform::Windows);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Darwin".parse::<Platform>().unwrap(), Platform::MacOs);
        assert_eq!(" win ".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn test_user_agent_detector_is_fixed() {
        let detector = UserAgentDetector::new(Some(FIREFOX_LINUX));
        assert_eq!(detector.detect(), Platform::Linux);
        assert_eq!(detector.detect(), Platform::Linux);
    }
}
