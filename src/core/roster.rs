use crate::core::profile::format_player_profile;
use crate::core::{ConfigProvider, PlayerRecord, RosterSource};
use crate::utils::error::Result;
use reqwest::Client;
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str =
    "https://api.sportsdata.io/v3/nfl/scores/json/PlayersByAvailable";

pub const PROFILE_SEPARATOR: &str = "\n---\n";
pub const NO_PLAYER_DATA: &str = "No player data available.";
pub const FETCH_ERROR_PREFIX: &str = "Error fetching or processing data:";

/// Fetches the available-players list over HTTP.
#[derive(Debug, Clone)]
pub struct RosterFetcher {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RosterFetcher {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint, api_key)
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint(), config.api_key())
    }

    fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl RosterSource for RosterFetcher {
    async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
        let url = self.request_url()?;

        // URL 帶 key：日誌只記 endpoint，錯誤訊息也去掉 URL
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        tracing::debug!("API response status: {}", response.status());

        let body = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        // `null` 視同空清單
        let players: Vec<PlayerRecord> =
            serde_json::from_str::<Option<Vec<PlayerRecord>>>(&body)?.unwrap_or_default();

        tracing::info!("Fetched {} player records", players.len());
        Ok(players)
    }
}

/// Joins formatted profiles with [`PROFILE_SEPARATOR`], or returns
/// [`NO_PLAYER_DATA`] for an empty roster.
pub fn format_roster(players: &[PlayerRecord]) -> String {
    if players.is_empty() {
        return NO_PLAYER_DATA.to_string();
    }

    players
        .iter()
        .map(format_player_profile)
        .collect::<Vec<_>>()
        .join(PROFILE_SEPARATOR)
}

/// Fetches and formats the roster. Failures are returned as text starting
/// with [`FETCH_ERROR_PREFIX`] instead of an error.
pub async fn fetch_roster_text<S: RosterSource + ?Sized>(source: &S) -> String {
    match source.fetch_players().await {
        Ok(players) => format_roster(&players),
        Err(e) => {
            tracing::warn!("Roster fetch failed: {}", e);
            format!("{} {}", FETCH_ERROR_PREFIX, e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NotifyError;
    use httpmock::prelude::*;

    const PLAYERS_PATH: &str = "/v3/nfl/scores/json/PlayersByAvailable";

    struct FailingSource;

    #[async_trait::async_trait]
    impl RosterSource for FailingSource {
        async fn fetch_players(&self) -> Result<Vec<PlayerRecord>> {
            Err(NotifyError::MissingConfigError {
                field: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_format_roster_empty() {
        assert_eq!(format_roster(&[]), NO_PLAYER_DATA);
    }

    #[test]
    fn test_format_roster_joins_with_separator() {
        let players = vec![
            PlayerRecord {
                name: Some("A".into()),
                ..Default::default()
            },
            PlayerRecord {
                name: Some("B".into()),
                ..Default::default()
            },
        ];

        let text = format_roster(&players);
        let parts: Vec<&str> = text.split(PROFILE_SEPARATOR).collect();

        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("Name: A\n"));
        assert!(parts[1].starts_with("Name: B\n"));
        assert!(text.contains("Status: N/A\n\n---\nName: B"));
    }

    #[test]
    fn test_request_url_appends_key() {
        let fetcher = RosterFetcher::new(DEFAULT_API_ENDPOINT, "abc123");
        let url = fetcher.request_url().unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.sportsdata.io/v3/nfl/scores/json/PlayersByAvailable?key=abc123"
        );
    }

    #[tokio::test]
    async fn test_fetch_roster_text_error_is_text() {
        let text = fetch_roster_text(&FailingSource).await;

        assert!(text.starts_with(FETCH_ERROR_PREFIX));
        assert!(text.contains("boom"));
    }

    #[tokio::test]
    async fn test_fetch_players_sends_key_query_param() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path(PLAYERS_PATH)
                .query_param("key", "secret-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"Name": "Travis Kelce", "Number": 87}]));
        });

        let fetcher = RosterFetcher::new(server.url(PLAYERS_PATH), "secret-key");
        let players = fetcher.fetch_players().await.unwrap();

        api_mock.assert();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].number.as_ref().unwrap().to_string(), "87");
    }

    #[tokio::test]
    async fn test_fetch_players_invalid_endpoint() {
        let fetcher = RosterFetcher::new("not a url", "k");
        let result = fetcher.fetch_players().await;

        assert!(matches!(result, Err(NotifyError::UrlError(_))));
    }
}
