use crate::core::Notifier;
use crate::utils::error::{NotifyError, Result};

pub const SUBJECT_SUFFIX: &str = "NFL Player Data";

pub fn chunk_subject(index: usize, total: usize) -> String {
    format!("Chunk {} of {} - {}", index + 1, total, SUBJECT_SUFFIX)
}

/// Sends chunks to a [`Notifier`] one at a time, in order.
pub struct ChunkPublisher<'a, N: Notifier> {
    notifier: &'a N,
}

impl<'a, N: Notifier> ChunkPublisher<'a, N> {
    pub fn new(notifier: &'a N) -> Self {
        Self { notifier }
    }

    /// Publishes every chunk and returns the count sent.
    ///
    /// Stops at the first failure with [`NotifyError::Publish`]; chunks already
    /// delivered stay delivered.
    pub async fn publish_all<S: AsRef<str>>(&self, chunks: &[S]) -> Result<usize> {
        let total = chunks.len();

        for (index, chunk) in chunks.iter().enumerate() {
            let subject = chunk_subject(index, total);

            if let Err(e) = self.notifier.publish(&subject, chunk.as_ref()).await {
                tracing::error!("Error publishing chunk {}: {}", index + 1, e);
                return Err(NotifyError::Publish {
                    chunk: index + 1,
                    total,
                    reason: e.to_string(),
                });
            }

            tracing::debug!("Published {} ({} bytes)", subject, chunk.as_ref().len());
        }

        Ok(total)
    }
}
