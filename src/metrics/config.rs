use http::Uri;
use std::env;
use std::string::String;

/// Appended to the dashboard name to form the CloudWatch namespace.
pub const NAMESPACE_SUFFIX: &str = "/PlayerSummary2";

#[derive(Debug, Clone)]
pub struct Config {
    pub dashboard_name: String,
    // only logged, the transform never calls it
    pub graphql_endpoint: Option<Uri>,
    pub region: Option<String>,
}

impl Config {
    pub fn load_from_env() -> Result<Config, String> {
        let dashboard_name = env::var("DASHBOARD_NAME")
            .map_err(|e| format!("DASHBOARD_NAME is not set: {}", e))?;

        let graphql_endpoint = match env::var("GRAPHQL_ENDPOINT") {
            Ok(endpoint) => Some(
                endpoint
                    .parse::<Uri>()
                    .map_err(|e| format!("error parsing GRAPHQL_ENDPOINT '{}' - {}", endpoint, e))?,
            ),
            Err(_) => None,
        };

        let region = env::var("AWS_REGION").ok().filter(|r| !r.trim().is_empty());

        Ok(Config {
            dashboard_name,
            graphql_endpoint,
            region,
        })
    }

    pub fn namespace(&self) -> String {
        format!("{}{}", self.dashboard_name, NAMESPACE_SUFFIX)
    }
}
