use async_trait::async_trait;
use aws_sdk_cloudwatch::error::SdkError;
use aws_sdk_cloudwatch::operation::put_metric_data::PutMetricDataError;
use aws_sdk_cloudwatch::types::{
    Dimension as CwDimension, MetricDatum as CwMetricDatum, StandardUnit,
};
use aws_sdk_cloudwatch::Client as CloudWatchClient;
use std::sync::Arc;
use tracing::debug;

use crate::metrics::datum::{MetricDatum, PutMetricDataRequest};

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("failed to put metric data: {0}")]
    PutMetricData(#[from] SdkError<PutMetricDataError>),
}

/// Destination for metric data points.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    async fn put_metric_data(&self, request: PutMetricDataRequest) -> Result<(), DispatchError>;
}

pub type DynMetricsSink = Arc<dyn MetricsSink>;

/// Writes metric data to CloudWatch, one PutMetricData call per request.
#[derive(Clone, Debug)]
pub struct CloudWatchSink {
    client: CloudWatchClient,
}

impl CloudWatchSink {
    pub fn new(client: CloudWatchClient) -> Self {
        CloudWatchSink { client }
    }
}

#[async_trait]
impl MetricsSink for CloudWatchSink {
    async fn put_metric_data(&self, request: PutMetricDataRequest) -> Result<(), DispatchError> {
        let metric_data = request
            .metric_data
            .into_iter()
            .map(to_cloudwatch_datum)
            .collect::<Vec<_>>();

        let output = self
            .client
            .put_metric_data()
            .namespace(request.namespace)
            .set_metric_data(Some(metric_data))
            .send()
            .await?;

        debug!("put metric data response: {:?}", output);
        Ok(())
    }
}

// unknown units are passed through as-is, CloudWatch rejects them
fn to_cloudwatch_datum(datum: MetricDatum) -> CwMetricDatum {
    let dimensions = datum
        .dimensions
        .into_iter()
        .map(|d| CwDimension::builder().name(d.name).value(d.value).build())
        .collect::<Vec<_>>();

    CwMetricDatum::builder()
        .metric_name(datum.name)
        .set_dimensions(Some(dimensions))
        .unit(StandardUnit::from(datum.unit.as_str()))
        .value(datum.value)
        .build()
}
