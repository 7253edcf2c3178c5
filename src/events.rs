use serde::{Deserialize, Serialize};

/// The batch delivered to one invocation.
///
/// Kinesis Analytics output delivery wraps the records with an invocation id and the
/// application ARN; neither is required and both are only used for logging.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransformEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_arn: Option<String>,
    pub records: Vec<TransformRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransformRecord {
    pub record_id: String,
    /// base64 encoded JSON payload
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TransformResponse {
    pub records: Vec<TransformResponseRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponseRecord {
    pub record_id: String,
    pub result: RecordResult,
}

impl TransformResponseRecord {
    pub fn ok(record_id: impl Into<String>) -> Self {
        TransformResponseRecord {
            record_id: record_id.into(),
            result: RecordResult::Ok,
        }
    }
}

/// Per-record acknowledgement. Dispatch failures are never reported back to the caller,
/// so `Ok` is the only status this function produces.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum RecordResult {
    Ok,
}
