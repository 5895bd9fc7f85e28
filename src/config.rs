//! Env-driven configuration for the pipeline.
//!
//! Values are read from the process environment once; `dotenv` is loaded on
//! demand by the binary. All fields are public so tests can build a
//! `Config` literally instead of mutating the process environment.
use std::env;
use dotenv;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:18789";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Credential for the synthesis backend (`FAL_KEY`). Checked by the
    /// synthesis client before any request is issued.
    pub fal_key: Option<String>,
    pub ref_main: Option<String>,
    pub ref_casual: Option<String>,
    pub ref_formal: Option<String>,
    pub ref_outdoor: Option<String>,
    /// Generic fallback reference image (`HEARTSYNC_REF_IMAGE`).
    pub ref_default: Option<String>,
    pub gateway_url: String,
    pub gateway_token: Option<String>,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Self {
        Config {
            fal_key: env::var("FAL_KEY").ok(),
            ref_main: env::var("HEARTSYNC_REF_MAIN").ok(),
            ref_casual: env::var("HEARTSYNC_REF_CASUAL").ok(),
            ref_formal: env::var("HEARTSYNC_REF_FORMAL").ok(),
            ref_outdoor: env::var("HEARTSYNC_REF_OUTDOOR").ok(),
            ref_default: env::var("HEARTSYNC_REF_IMAGE").ok(),
            gateway_url: env::var("OPENCLAW_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string()),
            gateway_token: env::var("OPENCLAW_GATEWAY_TOKEN").ok(),
        }
    }
}
