use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use nfl_roster_notify::core::HandlerResponse;
use nfl_roster_notify::utils::{logger, validation::Validate};
use nfl_roster_notify::{
    LambdaConfig, NotifyEngine, RosterFetcher, RosterPipeline, SnsNotifier,
};

/// Clients built once per process and reused across invocations.
struct Shared {
    config: LambdaConfig,
    fetcher: RosterFetcher,
    notifier: SnsNotifier,
}

async fn function_handler(
    shared: &Shared,
    event: LambdaEvent<serde_json::Value>,
) -> Result<HandlerResponse, Error> {
    // event payload 不影響流程
    tracing::info!(request_id = %event.context.request_id, "Starting roster notification");

    let pipeline = RosterPipeline::new(&shared.fetcher, &shared.notifier)
        .with_payload_source(shared.config.payload_source)
        .with_chunk_size(shared.config.chunk_size);

    let response = NotifyEngine::new(pipeline).run().await;

    tracing::info!(
        status_code = response.status_code,
        "Roster notification finished: {}",
        response.body
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let shared = Shared {
        fetcher: RosterFetcher::from_config(&config),
        notifier: SnsNotifier::new(SnsClient::new(&aws_config), config.sns_topic_arn.clone()),
        config,
    };
    let shared = &shared;

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(shared, event).await
    }))
    .await
}
