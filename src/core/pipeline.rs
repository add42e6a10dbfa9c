use crate::core::chunk::{split_message, DEFAULT_CHUNK_SIZE};
use crate::core::publisher::ChunkPublisher;
use crate::core::roster::fetch_roster_text;
use crate::core::{Notifier, PayloadSource, Pipeline, RosterSource};
use crate::utils::error::Result;

/// Payload the deployed function publishes when not configured to send the roster.
pub const PLACEHOLDER_PAYLOAD: &str = "...";

pub struct RosterPipeline<'a, R: RosterSource, N: Notifier> {
    source: &'a R,
    notifier: &'a N,
    payload_source: PayloadSource,
    chunk_size: usize,
}

impl<'a, R: RosterSource, N: Notifier> RosterPipeline<'a, R, N> {
    pub fn new(source: &'a R, notifier: &'a N) -> Self {
        Self {
            source,
            notifier,
            payload_source: PayloadSource::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_payload_source(mut self, payload_source: PayloadSource) -> Self {
        self.payload_source = payload_source;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

#[async_trait::async_trait]
impl<'a, R: RosterSource, N: Notifier> Pipeline for RosterPipeline<'a, R, N> {
    async fn extract(&self) -> String {
        match self.payload_source {
            PayloadSource::Placeholder => {
                tracing::debug!("Using placeholder payload");
                PLACEHOLDER_PAYLOAD.to_string()
            }
            PayloadSource::Roster => fetch_roster_text(self.source).await,
        }
    }

    fn transform(&self, payload: &str) -> Vec<String> {
        split_message(payload, self.chunk_size)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    async fn load(&self, chunks: Vec<String>) -> Result<usize> {
        ChunkPublisher::new(self.notifier).publish_all(&chunks).await
    }
}
