//! Conversation log settings.

use crate::enums::{Destination, LogType};
use crate::record::api_record;

api_record! {
    /// Where and how one type of conversation log is delivered.
    ///
    /// Audio logs can only go to S3; text logs go to CloudWatch Logs.
    pub struct LogSettingsRequest {
        log_type: LogType = "logType" => copy(set_log_type, with_log_type),
        destination: Destination = "destination" => copy(set_destination, with_destination),
        /// KMS key used to encrypt audio logs delivered to S3.
        kms_key_arn: String = "kmsKeyArn" => text(set_kms_key_arn, with_kms_key_arn),
        /// CloudWatch log group or S3 bucket receiving the logs.
        resource_arn: String = "resourceArn" => text(set_resource_arn, with_resource_arn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_wire_value() {
        let settings = LogSettingsRequest::new()
            .with_log_type(LogType::Text)
            .with_destination(Destination::CloudwatchLogs)
            .with_resource_arn("arn:aws:logs:us-east-1:123456789012:log-group:bots");
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["destination"], "CLOUDWATCH_LOGS");
        assert_eq!(json["logType"], "TEXT");
    }

    #[test]
    fn test_display() {
        let settings = LogSettingsRequest::new()
            .with_log_type(LogType::Audio)
            .with_destination(Destination::S3);
        assert_eq!(settings.to_string(), "{logType: AUDIO,destination: S3,}");
    }
}
