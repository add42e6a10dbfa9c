use crate::core::Notifier;
use crate::utils::error::{NotifyError, Result};
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client as SnsClient;

/// Publishes to one SNS topic.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: SnsClient,
    topic_arn: Option<String>,
}

impl SnsNotifier {
    pub fn new(client: SnsClient, topic_arn: Option<String>) -> Self {
        Self { client, topic_arn }
    }
}

impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<()> {
        let output = self
            .client
            .publish()
            .set_topic_arn(self.topic_arn.clone())
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| NotifyError::NotificationError {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("SNS message id: {:?}", output.message_id());
        Ok(())
    }
}
