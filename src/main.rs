use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use playersummary_cw_function::events::TransformEvent;
use playersummary_cw_function::metrics;
use playersummary_cw_function::metrics::config::Config;
use playersummary_cw_function::metrics::sink::{CloudWatchSink, DynMetricsSink};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    playersummary_cw_function::set_up_logging();

    info!(
        "Initializing {} version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let aws_config = aws_config::load_defaults(BehaviorVersion::v2023_11_09()).await;
    let config = Config::load_from_env()?;
    info!(
        region = ?aws_config.region(),
        namespace = %config.namespace(),
        graphql_endpoint = ?config.graphql_endpoint.as_ref().map(|uri| uri.to_string()),
        "configuration loaded"
    );

    let clients = playersummary_cw_function::AwsClients::new(&aws_config);
    let sink: DynMetricsSink = Arc::new(CloudWatchSink::new(clients.cloudwatch));

    run(service_fn(|request: LambdaEvent<TransformEvent>| {
        metrics::handler(sink.clone(), &config, request)
    }))
    .await
}
