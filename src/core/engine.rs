use crate::core::{HandlerResponse, Pipeline};

pub const SUCCESS_BODY: &str = "All chunks sent to SNS successfully";

pub struct NotifyEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NotifyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once. Publish failures are reported in
    /// the response rather than as an error.
    pub async fn run(&self) -> HandlerResponse {
        tracing::info!("Starting notification run");

        let payload = self.pipeline.extract().await;
        tracing::info!("Payload ready ({} bytes)", payload.len());

        let chunks = self.pipeline.transform(&payload);
        tracing::info!("Split payload into {} chunks", chunks.len());

        match self.pipeline.load(chunks).await {
            Ok(sent) => {
                tracing::info!("✅ Published {} chunks", sent);
                HandlerResponse::ok(SUCCESS_BODY)
            }
            Err(e) => {
                tracing::error!("❌ Publishing failed: {}", e);
                match e.failed_chunk() {
                    Some(chunk) => {
                        HandlerResponse::error(format!("Error publishing chunk {}", chunk))
                    }
                    None => HandlerResponse::error(e.to_string()),
                }
            }
        }
    }
}
