use clap::Parser;

use heartsync_sender::synthesis::{AspectRatio, OutputFormat};
use heartsync_sender::{generate_and_send, Config, PipelineOptions, Profile};

#[derive(Parser, Debug)]
#[command(
    name = "heartsync",
    about = "Generate an image from a prompt and send it to a channel",
    version
)]
struct Cli {
    /// Text prompt for the synthesis backend
    prompt: String,
    /// Channel to deliver the image to, e.g. "#general"
    channel: String,
    /// Caption sent with the image
    caption: Option<String>,
    /// Aspect ratio of the generated image
    #[arg(value_enum)]
    aspect_ratio: Option<AspectRatio>,
    /// Output format of the generated image
    #[arg(value_enum)]
    output_format: Option<OutputFormat>,
    /// Reference-image profile
    #[arg(value_enum)]
    profile: Option<Profile>,
    /// Deliver through the HTTP gateway instead of the openclaw CLI
    #[arg(long)]
    gateway: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    Config::dotenv_load();
    let config = Config::new();
    let cli = Cli::parse();

    let options = PipelineOptions {
        prompt: cli.prompt,
        channel: cli.channel,
        caption: cli.caption,
        aspect_ratio: cli.aspect_ratio,
        output_format: cli.output_format,
        profile: cli.profile,
        use_cli: Some(!cli.gateway),
    };

    match generate_and_send(&config, options).await {
        Ok(result) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).expect("result serializes")
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
