use bloggen::api::handler;
use bloggen::core::config::AppConfig;
use bloggen::pipeline::BlogPipeline;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    bloggen::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let pipeline = BlogPipeline::from_config(config).await.map_err(|e| {
        error!("Failed to initialize clients: {}", e);
        Error::from(e)
    })?;
    let pipeline = &pipeline;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(pipeline, event).await
    }))
    .await
}
