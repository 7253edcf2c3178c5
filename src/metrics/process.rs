use crate::events::{TransformEvent, TransformRecord, TransformResponse, TransformResponseRecord};
use crate::metrics::config::Config;
use crate::metrics::datum::{PlayerSummary, PutMetricDataRequest};
use crate::metrics::sink::DynMetricsSink;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use base64::prelude::*;
use tracing::{debug, error, info};

#[derive(thiserror::Error, Debug)]
pub enum TransformError {
    #[error("record {record_id} is not valid base64: {source}")]
    Base64 {
        record_id: String,
        source: base64::DecodeError,
    },
    #[error("record {record_id} does not hold a valid player summary: {source}")]
    Payload {
        record_id: String,
        source: serde_json::Error,
    },
}

/// decode_record - base64 decodes the record data and parses it as a player summary
pub fn decode_record(record: &TransformRecord) -> Result<PlayerSummary, TransformError> {
    let raw = BASE64_STANDARD
        .decode(record.data.as_bytes())
        .map_err(|source| TransformError::Base64 {
            record_id: record.record_id.clone(),
            source,
        })?;

    serde_json::from_slice(&raw).map_err(|source| TransformError::Payload {
        record_id: record.record_id.clone(),
        source,
    })
}

/// dispatch - hands the request to the sink on a detached task. The outcome is only logged.
/// Must be called from within a tokio runtime.
pub(crate) fn dispatch(sink: DynMetricsSink, record_id: String, request: PutMetricDataRequest) {
    tokio::spawn(async move {
        match sink.put_metric_data(request).await {
            Ok(()) => info!(record_id = %record_id, "put metric in cloudwatch"),
            Err(e) => error!(
                record_id = %record_id,
                error = %DisplayErrorContext(&e),
                "failed to put metric in cloudwatch"
            ),
        }
    });
}

/// transform_event - turns every record into a metric datum and acknowledges it.
///
/// Records are handled in order. The first record that fails to decode aborts the whole
/// batch; metrics already dispatched for earlier records are not recalled.
/// Dispatch spawns onto the current tokio runtime, so this only runs inside the handler.
pub(crate) fn transform_event(
    sink: &DynMetricsSink,
    config: &Config,
    event: TransformEvent,
) -> Result<TransformResponse, TransformError> {
    info!(
        total_records = event.records.len(),
        invocation_id = ?event.invocation_id,
        application_arn = ?event.application_arn,
        "player summary transform start"
    );
    debug!("event: {:?}", event);
    debug!(
        graphql_endpoint = ?config.graphql_endpoint.as_ref().map(|uri| uri.to_string()),
        region = ?config.region,
        "transform environment"
    );

    let namespace = config.namespace();
    let mut records = Vec::with_capacity(event.records.len());

    for record in event.records {
        debug!("record: {:?}", record);
        let summary = decode_record(&record)?;
        info!(record_id = %record.record_id, "data: {:?}", summary);

        dispatch(
            sink.clone(),
            record.record_id.clone(),
            summary.into_request(namespace.clone()),
        );

        records.push(TransformResponseRecord::ok(record.record_id));
    }

    Ok(TransformResponse { records })
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(record_id: &str, payload: &str) -> TransformRecord {
        TransformRecord {
            record_id: record_id.to_string(),
            data: BASE64_STANDARD.encode(payload),
        }
    }

    #[test]
    fn test_decode_record() {
        let summary = decode_record(&record(
            "1",
            r#"{"METRIC_TYPE":"buffer_time","CLIENT_PLATFORM":" web ","METRIC_UNIT":"Count","SUMMARY":3}"#,
        ))
        .unwrap();

        assert_eq!(
            summary,
            PlayerSummary {
                metric_type: "buffer_time".to_string(),
                client_platform: " web ".to_string(),
                metric_unit: "Count".to_string(),
                summary: 3.0,
            }
        );
    }

    #[test]
    fn test_decode_record_invalid_base64() {
        let bad = TransformRecord {
            record_id: "1".to_string(),
            data: "not base64!".to_string(),
        };
        let err = decode_record(&bad).unwrap_err();
        assert!(matches!(err, TransformError::Base64 { ref record_id, .. } if record_id == "1"));
    }

    #[test]
    fn test_decode_record_invalid_json() {
        let err = decode_record(&record("7", "{\"METRIC_TYPE\":")).unwrap_err();
        assert!(matches!(err, TransformError::Payload { ref record_id, .. } if record_id == "7"));
    }

    #[test]
    fn test_decode_record_missing_field() {
        let err = decode_record(&record(
            "2",
            r#"{"CLIENT_PLATFORM":"web","METRIC_UNIT":"Count","SUMMARY":3}"#,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("METRIC_TYPE"), "got: {}", err);
    }
}
