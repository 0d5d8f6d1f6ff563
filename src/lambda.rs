use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use medconnect_tags::adapters::endpoint::handle_request;
use medconnect_tags::utils::{logger, validation::Validate};
use medconnect_tags::{ClassifyResponse, LambdaConfig, TagClassifier};
use serde_json::Value;
use std::sync::Arc;

async fn function_handler(
    classifier: Arc<TagClassifier>,
    event: LambdaEvent<Value>,
) -> Result<ClassifyResponse, Error> {
    tracing::info!("Handling classify request {}", event.context.request_id);
    Ok(handle_request(&classifier, event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入並驗證分類器
    let config = LambdaConfig::from_env();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }
    let classifier = Arc::new(config.load_classifier()?);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let classifier = Arc::clone(&classifier);
        async move { function_handler(classifier, event).await }
    }))
    .await
}
