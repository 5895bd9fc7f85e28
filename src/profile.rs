//! Reference-image profiles and their resolution chain.
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::Config;

/// Reference image used when every configured value is absent. Keeps the
/// resolution chain total: a profile always maps to some image.
pub const FALLBACK_REFERENCE_IMAGE: &str =
    "https://cdn.jsdelivr.net/gh/soulomonlab/heartsync@main/assets/main.png";

/// Named preset selecting which reference image variant to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Main,
    Casual,
    Formal,
    Outdoor,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Main
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Main => "main",
            Profile::Casual => "casual",
            Profile::Formal => "formal",
            Profile::Outdoor => "outdoor",
        };
        write!(f, "{}", name)
    }
}

impl Profile {
    /// Resolve the reference image URI for this profile.
    ///
    /// First non-empty value wins: the per-profile setting, then the main
    /// profile's setting, then the generic `HEARTSYNC_REF_IMAGE` override,
    /// then [`FALLBACK_REFERENCE_IMAGE`]. Never fails.
    pub fn reference_image(&self, config: &Config) -> String {
        let configured = match self {
            Profile::Main => config.ref_main.as_deref(),
            Profile::Casual => config.ref_casual.as_deref(),
            Profile::Formal => config.ref_formal.as_deref(),
            Profile::Outdoor => config.ref_outdoor.as_deref(),
        };

        non_empty(configured)
            .or_else(|| non_empty(config.ref_main.as_deref()))
            .or_else(|| non_empty(config.ref_default.as_deref()))
            .unwrap_or(FALLBACK_REFERENCE_IMAGE)
            .to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
