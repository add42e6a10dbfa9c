use crate::domain::model::PlayerRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where player records come from.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>>;
}

/// A pub/sub topic that accepts one message per call.
pub trait Notifier: Send + Sync {
    fn publish(
        &self,
        subject: &str,
        message: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
}

/// Extract/transform/load stages of one invocation.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Produces the payload text. Never fails; fetch problems become text.
    async fn extract(&self) -> String;
    fn transform(&self, payload: &str) -> Vec<String>;
    /// Publishes every chunk, returning how many were sent.
    async fn load(&self, chunks: Vec<String>) -> Result<usize>;
}
