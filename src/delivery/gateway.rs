//! HTTP transport: deliver through the OpenClaw gateway.
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::delivery::{DeliveryMessage, Transport};
use crate::error::{AppError, AppResult};

pub struct GatewayTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GatewayTransport {
    pub fn from_config(config: &Config) -> Self {
        GatewayTransport {
            client: Client::new(),
            base_url: config.gateway_url.trim_end_matches('/').to_string(),
            token: config.gateway_token.clone(),
        }
    }

    pub fn message_url(&self) -> String {
        format!("{}/message", self.base_url)
    }
}

#[async_trait]
impl Transport for GatewayTransport {
    async fn deliver(&self, message: &DeliveryMessage) -> AppResult<()> {
        let url = self.message_url();
        tracing::info!("Delivering via gateway at {}", url);

        let mut request = self.client.post(&url).json(message);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(|e| {
            AppError::Delivery(format!("gateway unreachable at {}: {}", url, e))
        })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!("Gateway returned an error: {}", error_body);
            Err(AppError::Delivery(error_body))
        }
    }

    fn name(&self) -> &str {
        "openclaw-gateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GATEWAY_URL;

    #[test]
    fn message_url_joins_base_and_path() {
        let config = Config {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            ..Config::default()
        };
        let transport = GatewayTransport::from_config(&config);
        assert_eq!(transport.message_url(), "http://localhost:18789/message");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let config = Config {
            gateway_url: "http://gateway.example:18789/".to_string(),
            ..Config::default()
        };
        let transport = GatewayTransport::from_config(&config);
        assert_eq!(
            transport.message_url(),
            "http://gateway.example:18789/message"
        );
    }
}
