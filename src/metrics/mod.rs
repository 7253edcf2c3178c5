use crate::events::{TransformEvent, TransformResponse};
use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

pub mod config;
pub mod datum;
pub mod process;
pub mod sink;

use config::Config;
use sink::DynMetricsSink;

// player summary metrics handler
pub async fn handler(
    sink: DynMetricsSink,
    config: &Config,
    evt: LambdaEvent<TransformEvent>,
) -> Result<TransformResponse, Error> {
    info!(request_id = %evt.context.request_id, "Handling lambda invocation");
    let response = process::transform_event(&sink, config, evt.payload)?;
    Ok(response)
}
