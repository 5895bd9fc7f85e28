//! Delivery of a generated image to a chat channel via OpenClaw.
//!
//! Two interchangeable transports implement the [`Transport`] capability:
//! - `cli`: spawns the local `openclaw` executable.
//! - `gateway`: posts the message to the HTTP gateway.
//!
//! Callers pick one through [`select_transport`]; nothing upstream branches
//! on the transport kind.
pub mod cli;
pub mod gateway;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::Config;
use crate::error::AppResult;

/// Message posted to a channel. Built only after a valid image URL exists;
/// immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryMessage {
    pub action: &'static str,
    pub channel: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl DeliveryMessage {
    pub fn send(channel: String, message: String, media: Option<String>) -> Self {
        DeliveryMessage {
            action: "send",
            channel,
            message,
            media,
        }
    }
}

/// One delivery attempt, success or failure. No retry, no acknowledgment
/// polling beyond the single response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, message: &DeliveryMessage) -> AppResult<()>;

    fn name(&self) -> &str;
}

/// Pick the transport implementation for this invocation.
pub fn select_transport(use_cli: bool, config: &Config) -> Box<dyn Transport> {
    if use_cli {
        Box::new(cli::CliTransport::new())
    } else {
        Box::new(gateway::GatewayTransport::from_config(config))
    }
}
