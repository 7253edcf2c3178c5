use serde::Deserialize;

pub const CLIENT_PLATFORM_DIMENSION: &str = "ClientPlatform";

/// Decoded record payload. Fields other than these four are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlayerSummary {
    #[serde(rename = "METRIC_TYPE")]
    pub metric_type: String,
    #[serde(rename = "CLIENT_PLATFORM")]
    pub client_platform: String,
    #[serde(rename = "METRIC_UNIT")]
    pub metric_unit: String,
    #[serde(rename = "SUMMARY")]
    pub summary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDatum {
    pub name: String,
    pub dimensions: Vec<Dimension>,
    pub unit: String,
    pub value: f64,
}

/// Parameters of a single PutMetricData call.
#[derive(Debug, Clone, PartialEq)]
pub struct PutMetricDataRequest {
    pub namespace: String,
    pub metric_data: Vec<MetricDatum>,
}

impl PlayerSummary {
    /// Builds the datum for this summary. String fields are trimmed, the value is not touched.
    pub fn to_metric_datum(&self) -> MetricDatum {
        MetricDatum {
            name: self.metric_type.trim().to_string(),
            dimensions: vec![Dimension {
                name: CLIENT_PLATFORM_DIMENSION.to_string(),
                value: self.client_platform.trim().to_string(),
            }],
            unit: self.metric_unit.trim().to_string(),
            value: self.summary,
        }
    }

    pub fn into_request(self, namespace: impl Into<String>) -> PutMetricDataRequest {
        PutMetricDataRequest {
            namespace: namespace.into(),
            metric_data: vec![self.to_metric_datum()],
        }
    }
}
