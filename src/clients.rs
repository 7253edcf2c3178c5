use aws_config::SdkConfig;
use aws_sdk_cloudwatch::Client as CloudWatchClient;

/// A type used to hold the AWS clients required to interact with AWS services
/// used by the lambda function.
#[derive(Clone, Debug)]
pub struct AwsClients {
    pub cloudwatch: CloudWatchClient,
}

impl AwsClients {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        AwsClients {
            cloudwatch: CloudWatchClient::new(sdk_config),
        }
    }
}
