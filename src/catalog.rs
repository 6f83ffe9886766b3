//! Download catalog shown on the downloads page.

use serde::Serialize;

use crate::platform::Platform;

const RELEASE_VERSION: &str = "v1.0.0";

const COMMON_REQUIREMENTS: [&str; 3] = [
    "4 GB RAM minimum",
    "2 GB free disk space",
    "Internet connection",
];

/// A single downloadable package format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadFormat {
    pub name: &'static str,
    pub size: &'static str,
}

/// Everything the downloads page shows for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRelease {
    pub platform: Platform,
    pub version: &'static str,
    pub size: &'static str,
    pub formats: Vec<DownloadFormat>,
    pub requirements: Vec<&'static str>,
}

impl PlatformRelease {
    fn new(
        platform: Platform,
        size: &'static str,
        formats: &[(&'static str, &'static str)],
        minimum_os: &'static str,
    ) -> Self {
        let mut requirements = vec![minimum_os];
        requirements.extend(COMMON_REQUIREMENTS);

        Self {
            platform,
            version: RELEASE_VERSION,
            size,
            formats: formats
                .iter()
                .map(|&(name, size)| DownloadFormat { name, size })
                .collect(),
            requirements,
        }
    }

    pub fn is_recommended(&self, detected: Platform) -> bool {
        self.platform == detected
    }
}

/// Releases for every platform, in display order.
pub fn catalog() -> Vec<PlatformRelease> {
    Platform::ALL.iter().map(|&p| release_for(p)).collect()
}

/// Release information for a single platform.
pub fn release_for(platform: Platform) -> PlatformRelease {
    match platform {
        Platform::Windows => PlatformRelease::new(
            platform,
            "125 MB",
            &[("Installer (.exe)", "125 MB"), ("Portable (.zip)", "98 MB")],
            "Windows 10 or later",
        ),
        Platform::MacOs => PlatformRelease::new(
            platform,
            "110 MB",
            &[("Universal (.dmg)", "110 MB"), ("App Store", "Free")],
            "macOS 10.15 or later",
        ),
        Platform::Linux => PlatformRelease::new(
            platform,
            "95 MB",
            &[
                ("AppImage", "95 MB"),
                ("Debian (.deb)", "89 MB"),
                ("RPM (.rpm)", "91 MB"),
            ],
            "Ubuntu 18.04+ or equivalent",
        ),
    }
}
