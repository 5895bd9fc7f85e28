//! The generate-and-send pipeline.
//!
//! Strictly sequential: resolve defaults, synthesize, extract the primary
//! image URL, deliver. The first failure unwinds immediately; delivery is
//! never attempted without a valid image URL, and a synthesized image is
//! not cleaned up when delivery fails.
use serde::Serialize;

use crate::config::Config;
use crate::delivery::{select_transport, DeliveryMessage};
use crate::error::{AppError, AppResult};
use crate::profile::Profile;
use crate::synthesis::client::SynthesisClient;
use crate::synthesis::{AspectRatio, OutputFormat, SynthesisRequest, SynthesisResult};

pub const DEFAULT_CAPTION: &str = "Generated with HeartSync";

/// User-supplied inputs; `None` fields take the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub prompt: String,
    pub channel: String,
    pub caption: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub output_format: Option<OutputFormat>,
    pub profile: Option<Profile>,
    /// Deliver through the local CLI when true (the default), the HTTP
    /// gateway otherwise.
    pub use_cli: Option<bool>,
}

/// Final output surfaced to the caller on success.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub profile: Profile,
    #[serde(rename = "revisedPrompt", skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// First image URL out of a synthesis response. A success response with no
/// images is an error, not an empty result.
pub fn primary_image_url(result: &SynthesisResult) -> AppResult<String> {
    result
        .images
        .first()
        .map(|image| image.url.clone())
        .ok_or(AppError::EmptyResult)
}

/// Run the full pipeline: one synthesis call, one delivery attempt.
pub async fn generate_and_send(
    config: &Config,
    options: PipelineOptions,
) -> AppResult<PipelineResult> {
    let caption = options
        .caption
        .unwrap_or_else(|| DEFAULT_CAPTION.to_string());
    let aspect_ratio = options.aspect_ratio.unwrap_or_default();
    let output_format = options.output_format.unwrap_or_default();
    let profile = options.profile.unwrap_or_default();
    let use_cli = options.use_cli.unwrap_or(true);

    // Credential check happens here, before any request leaves the process.
    let client = SynthesisClient::from_config(config)?;

    tracing::info!("Generating with profile: {}", profile);
    let request = SynthesisRequest::new(
        profile.reference_image(config),
        options.prompt,
        aspect_ratio,
        output_format,
    );
    let result = client.generate(&request).await?;

    let image_url = primary_image_url(&result)?;

    let message = DeliveryMessage::send(options.channel, caption, Some(image_url.clone()));
    let transport = select_transport(use_cli, config);
    tracing::info!("Sending to channel via {}", transport.name());
    transport.deliver(&message).await?;

    Ok(PipelineResult {
        success: true,
        image_url,
        profile,
        revised_prompt: result.revised_prompt,
    })
}
