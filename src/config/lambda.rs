use crate::core::chunk::DEFAULT_CHUNK_SIZE;
use crate::core::roster::DEFAULT_API_ENDPOINT;
use crate::core::{ConfigProvider, PayloadSource};
use crate::utils::error::{NotifyError, Result};
use crate::utils::redacted::Redacted;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use std::env;

/// SNS rejects messages over 256 KiB.
pub const MAX_CHUNK_SIZE: usize = 256 * 1024;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    /// Left unvalidated; a missing topic shows up as a publish failure.
    pub sns_topic_arn: Option<String>,
    pub payload_source: PayloadSource,
    pub api_key: Option<Redacted<String>>,
    pub api_endpoint: String,
    pub chunk_size: usize,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let payload_source = match lookup("PAYLOAD_SOURCE") {
            Some(value) => {
                value
                    .parse()
                    .map_err(|reason| NotifyError::InvalidConfigValueError {
                        field: "PAYLOAD_SOURCE".to_string(),
                        value: value.clone(),
                        reason,
                    })?
            }
            None => PayloadSource::default(),
        };

        let chunk_size = match lookup("CHUNK_SIZE") {
            Some(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|e| NotifyError::InvalidConfigValueError {
                        field: "CHUNK_SIZE".to_string(),
                        value: value.clone(),
                        reason: format!("{}", e),
                    })?
            }
            None => DEFAULT_CHUNK_SIZE,
        };

        Ok(Self {
            sns_topic_arn: lookup("SNS_TOPIC_ARN"),
            payload_source,
            api_key: lookup("SPORTSDATA_API_KEY").map(Redacted::from),
            api_endpoint: lookup("SPORTSDATA_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            chunk_size,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().map(String::as_str).unwrap_or("")
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_range("chunk_size", self.chunk_size, 1, MAX_CHUNK_SIZE)?;

        // 只有要抓 roster 時才需要 API 設定
        if self.payload_source == PayloadSource::Roster {
            validate_url("api_endpoint", &self.api_endpoint)?;
            let api_key = validate_required_field("SPORTSDATA_API_KEY", &self.api_key)?;
            validate_non_empty_string("SPORTSDATA_API_KEY", api_key)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
