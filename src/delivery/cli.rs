//! Subprocess transport: deliver through the local `openclaw` executable.
//!
//! Arguments are passed as a vector, never interpolated into a shell
//! string, so channel names, captions, and media URLs containing spaces or
//! quotes keep their boundaries.
use async_trait::async_trait;
use tokio::process::Command;

use crate::delivery::{DeliveryMessage, Transport};
use crate::error::{AppError, AppResult};

pub const OPENCLAW_BIN: &str = "openclaw";

pub struct CliTransport {
    program: String,
}

impl CliTransport {
    pub fn new() -> Self {
        CliTransport {
            program: OPENCLAW_BIN.to_string(),
        }
    }
}

impl Default for CliTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument vector for `openclaw message send`, without the program name.
pub fn command_args(message: &DeliveryMessage) -> Vec<String> {
    let mut args = vec![
        "message".to_string(),
        "send".to_string(),
        "--action".to_string(),
        message.action.to_string(),
        "--channel".to_string(),
        message.channel.clone(),
        "--message".to_string(),
        message.message.clone(),
    ];
    if let Some(media) = &message.media {
        args.push("--media".to_string());
        args.push(media.clone());
    }
    args
}

#[async_trait]
impl Transport for CliTransport {
    async fn deliver(&self, message: &DeliveryMessage) -> AppResult<()> {
        let args = command_args(message);
        tracing::info!("Delivering via {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| {
                AppError::Delivery(format!("failed to run {}: {}", self.program, e))
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!("{} exited with {}: {}", self.program, output.status, stderr);
            Err(AppError::Delivery(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }

    fn name(&self) -> &str {
        "openclaw-cli"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_follow_the_cli_contract() {
        let message = DeliveryMessage::send(
            "#general".into(),
            "caption".into(),
            Some("https://cdn.example/out.jpeg".into()),
        );
        assert_eq!(
            command_args(&message),
            vec![
                "message",
                "send",
                "--action",
                "send",
                "--channel",
                "#general",
                "--message",
                "caption",
                "--media",
                "https://cdn.example/out.jpeg",
            ]
        );
    }

    #[test]
    fn args_preserve_spaces_and_quotes() {
        let message = DeliveryMessage::send(
            "my channel".into(),
            r#"a "quoted" caption; rm -rf /"#.into(),
            Some("https://cdn.example/out.jpeg".into()),
        );
        let args = command_args(&message);
        assert_eq!(args[5], "my channel");
        assert_eq!(args[7], r#"a "quoted" caption; rm -rf /"#);
    }

    #[test]
    fn media_flag_dropped_when_absent() {
        let message = DeliveryMessage::send("#general".into(), "caption".into(), None);
        let args = command_args(&message);
        assert!(!args.contains(&"--media".to_string()));
    }

    #[tokio::test]
    async fn missing_executable_is_a_delivery_error() {
        let transport = CliTransport {
            program: "openclaw-definitely-not-installed".to_string(),
        };
        let message = DeliveryMessage::send("#general".into(), "caption".into(), None);
        assert!(matches!(
            transport.deliver(&message).await,
            Err(AppError::Delivery(_))
        ));
    }
}
