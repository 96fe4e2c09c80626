//! Lambda entrypoint: parse, run the pipeline, and map the outcome to a response.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use super::parsing::{self, InvocationSource};
use crate::pipeline::{BlogPipeline, Stage, log_stage};

/// Handles one invocation payload. Every failure becomes a structured
/// response, so this never returns an error.
pub async fn handle_payload(pipeline: &BlogPipeline, payload: &Value) -> Value {
    log_stage(Stage::Received);
    let source = InvocationSource::detect(payload);

    let request = match parsing::extract_topic(payload) {
        Ok(r) => r,
        Err(e) => {
            error!(kind = e.kind(), "Rejected request: {}", e);
            log_stage(Stage::Failed(e.kind()));
            return helpers::from_error(source, &e);
        }
    };
    log_stage(Stage::Validated);

    #[cfg(feature = "debug-logs")]
    info!(topic = %request.topic, "Validated blog topic");

    let response = match pipeline.run(&request).await {
        Ok(artifact) => {
            info!(key = %artifact.storage_key, "Blog generation and saving are completed");
            helpers::ok_blog_url(source, &artifact.access_url)
        }
        Err(e) => {
            error!(kind = e.kind(), "Blog generation failed: {}", e);
            log_stage(Stage::Failed(e.kind()));
            return helpers::from_error(source, &e);
        }
    };

    log_stage(Stage::Responded);
    response
}

/// Lambda handler for the blog generation function.
///
/// # Errors
///
/// Never returns an error in practice; failures are reported through the
/// response `statusCode`.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    pipeline: &BlogPipeline,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_payload(pipeline, &event.payload).await)
}

pub use self::function_handler as handler;
