use std::fmt::{self, Write};

use anyhow::Result;

use crate::catalog::{PlatformRelease, catalog};
use crate::platform::Platform;

use super::config::Config;
use super::detect::detected_platform;

/// Print the downloads page: every platform, the detected one marked as recommended.
#[tracing::instrument(skip(config))]
pub fn downloads(config: &Config, json: bool) -> Result<()> {
    let detected = detected_platform(config);
    let releases = catalog();

    if json {
        let value = serde_json::json!({
            "recommended": detected,
            "releases": releases,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_downloads(&releases, detected)?);
    }
    Ok(())
}

pub(crate) fn render_downloads(
    releases: &[PlatformRelease],
    detected: Platform,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for release in releases {
        write_release(&mut out, release, detected)?;
    }
    Ok(out)
}

fn write_release(out: &mut String, release: &PlatformRelease, detected: Platform) -> fmt::Result {
    let marker = if release.is_recommended(detected) {
        " [RECOMMENDED]"
    } else {
        ""
    };
    writeln!(out, "{}{}", release.platform, marker)?;
    writeln!(out, "  {} \u{2022} {}", release.version, release.size)?;
    for format in &release.formats {
        writeln!(out, "  - {} ({})", format.name, format.size)?;
    }
    writeln!(out, "  Requirements:")?;
    for requirement in &release.requirements {
        writeln!(out, "    {}", requirement)?;
    }
    writeln!(out, "  {}", release.platform.download_label())?;
    writeln!(out)
}
