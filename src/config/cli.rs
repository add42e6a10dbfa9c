use crate::core::roster::DEFAULT_API_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::redacted::Redacted;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

/// Fetches the roster and prints it; publishes nothing.
#[derive(Debug, Clone, Parser)]
#[command(name = "nfl-roster-notify")]
#[command(about = "Fetch the NFL available-players roster and print the formatted profiles")]
pub struct CliConfig {
    #[arg(long, env = "SPORTSDATA_API_KEY", hide_env_values = true)]
    pub api_key: Redacted<String>,

    #[arg(long, env = "SPORTSDATA_API_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::try_parse_from([
            "nfl-roster-notify",
            "--api-key",
            "test-key",
            "--api-endpoint",
            "http://localhost:9000/players",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.api_key(), "test-key");
        assert_eq!(config.api_endpoint(), "http://localhost:9000/players");
        assert!(config.verbose);
        assert!(config.validate().is_ok());
        assert!(!format!("{:?}", config).contains("test-key"));
    }

    #[test]
    fn test_blank_key_fails_validation() {
        let config = CliConfig {
            api_key: Redacted::from("  ".to_string()),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            verbose: false,
        };

        assert!(config.validate().is_err());
    }
}
