//! HeartSync image sender library
//!
//! Modules:
//! - `config`: Env-driven configuration loader.
//! - `profile`: Reference-image profiles and their resolution chain.
//! - `synthesis`: Request types and thin client for the synthesis backend.
//! - `delivery`: OpenClaw delivery message and the two transports.
//! - `pipeline`: The generate-and-send orchestration.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `Profile`,
//! `SynthesisClient`, and the pipeline entry point.
pub mod config;
pub mod delivery;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod synthesis;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use pipeline::{generate_and_send, PipelineOptions, PipelineResult};
pub use profile::Profile;
pub use synthesis::client::SynthesisClient;
