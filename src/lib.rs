/// bloggen - A Lambda function that writes blog posts with Amazon Bedrock.
///
/// One invocation takes a topic, asks a Bedrock foundation model for a
/// markdown blog post, stores it in S3, confirms the object landed, and
/// returns a presigned download URL.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Amazon Bedrock (`InvokeModel`) for text generation
/// - S3 for storage and presigned links
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use bloggen::core::config::AppConfig;
/// use bloggen::core::models::GenerationRequest;
/// use bloggen::pipeline::BlogPipeline;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     bloggen::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let pipeline = BlogPipeline::from_config(config).await?;
///
///     let artifact = pipeline
///         .run(&GenerationRequest {
///             topic: "serverless architecture".into(),
///         })
///         .await?;
///     println!("Blog available at {}", artifact.access_url);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod prompt;
pub mod storage;

pub use errors::BlogError;
pub use pipeline::BlogPipeline;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. The level comes from `RUST_LOG` and
/// defaults to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// bloggen::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
