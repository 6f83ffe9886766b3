//! Platform detection module
//!
//! This module classifies the visitor's operating system from a user-agent
//! string so the downloads page can recommend the matching installer.
//! The result is cosmetic only and never gates features.

mod detection;

pub use detection::{Platform, PlatformDetector, UserAgentDetector, detect_platform};
