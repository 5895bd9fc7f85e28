//! Request and response types for the image-synthesis backend.
pub mod client;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Aspect ratios accepted by the synthesis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum AspectRatio {
    #[value(name = "2:1")]
    #[serde(rename = "2:1")]
    R2x1,
    #[value(name = "20:9")]
    #[serde(rename = "20:9")]
    R20x9,
    #[value(name = "19.5:9")]
    #[serde(rename = "19.5:9")]
    R19_5x9,
    #[value(name = "16:9")]
    #[serde(rename = "16:9")]
    R16x9,
    #[value(name = "4:3")]
    #[serde(rename = "4:3")]
    R4x3,
    #[value(name = "3:2")]
    #[serde(rename = "3:2")]
    R3x2,
    #[value(name = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    #[value(name = "2:3")]
    #[serde(rename = "2:3")]
    R2x3,
    #[value(name = "3:4")]
    #[serde(rename = "3:4")]
    R3x4,
    #[value(name = "9:16")]
    #[serde(rename = "9:16")]
    R9x16,
    #[value(name = "9:19.5")]
    #[serde(rename = "9:19.5")]
    R9x19_5,
    #[value(name = "9:20")]
    #[serde(rename = "9:20")]
    R9x20,
    #[value(name = "1:2")]
    #[serde(rename = "1:2")]
    R1x2,
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    Webp,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg
    }
}

/// Body of the single POST to the synthesis backend. Constructed once,
/// sent once, never mutated.
#[derive(Debug, Serialize)]
pub struct SynthesisRequest {
    pub image_url: String,
    pub prompt: String,
    pub num_images: u32,
    pub aspect_ratio: AspectRatio,
    pub output_format: OutputFormat,
}

impl SynthesisRequest {
    pub fn new(
        image_url: String,
        prompt: String,
        aspect_ratio: AspectRatio,
        output_format: OutputFormat,
    ) -> Self {
        SynthesisRequest {
            image_url,
            prompt,
            // One image per invocation.
            num_images: 1,
            aspect_ratio,
            output_format,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedImage {
    pub url: String,
    pub content_type: String,
    #[serde(default)]
    pub file_name: Option<String>,
    pub width: u32,
    pub height: u32,
}

/// Parsed backend response. An empty `images` sequence is an error
/// condition; the orchestrator rejects it, not the client.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisResult {
    pub images: Vec<GeneratedImage>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = SynthesisRequest::new(
            "https://img.example/ref.png".into(),
            "sunset selfie".into(),
            AspectRatio::default(),
            OutputFormat::default(),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "image_url": "https://img.example/ref.png",
                "prompt": "sunset selfie",
                "num_images": 1,
                "aspect_ratio": "1:1",
                "output_format": "jpeg",
            })
        );
    }

    #[test]
    fn fractional_ratios_keep_their_wire_strings() {
        assert_eq!(
            serde_json::to_value(AspectRatio::R19_5x9).unwrap(),
            json!("19.5:9")
        );
        assert_eq!(
            serde_json::to_value(AspectRatio::R9x19_5).unwrap(),
            json!("9:19.5")
        );
    }

    #[test]
    fn parses_response_with_optional_fields_missing() {
        let result: SynthesisResult = serde_json::from_value(json!({
            "images": [{
                "url": "https://cdn.example/out.jpeg",
                "content_type": "image/jpeg",
                "width": 1024,
                "height": 1024,
            }]
        }))
        .unwrap();
        assert_eq!(result.images.len(), 1);
        assert!(result.images[0].file_name.is_none());
        assert!(result.revised_prompt.is_none());
    }

    #[test]
    fn parses_empty_image_sequence() {
        let result: SynthesisResult =
            serde_json::from_value(json!({ "images": [] })).unwrap();
        assert!(result.images.is_empty());
    }
}
