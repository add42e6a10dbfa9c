use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar from the roster API.
///
/// The API mixes strings (`"6'4\""`) and numbers (`225`) freely, so the raw
/// JSON value is kept and rendered without quotes when it is a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(pub serde_json::Value);

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self(serde_json::Value::Number(value.into()))
    }
}

/// One entry of the `PlayersByAvailable` response. `null` and missing keys both
/// decode to `None`; keys not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRecord {
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub position: Option<FieldValue>,
    #[serde(default)]
    pub team: Option<FieldValue>,
    /// Jersey number.
    #[serde(default)]
    pub number: Option<FieldValue>,
    #[serde(default)]
    pub height: Option<FieldValue>,
    #[serde(default)]
    pub weight: Option<FieldValue>,
    #[serde(default)]
    pub college: Option<FieldValue>,
    /// Years of experience.
    #[serde(default)]
    pub experience: Option<FieldValue>,
    #[serde(default)]
    pub status: Option<FieldValue>,
}

/// Result object returned to the invocation harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// What the production path publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadSource {
    /// The fixed placeholder payload the deployed function has always sent.
    #[default]
    Placeholder,
    /// The formatted roster text from the API.
    Roster,
}

impl std::str::FromStr for PayloadSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(PayloadSource::Placeholder),
            "roster" => Ok(PayloadSource::Roster),
            other => Err(format!(
                "unknown payload source '{}', expected 'placeholder' or 'roster'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_record_decodes_mixed_types_and_nulls() {
        let json = serde_json::json!({
            "PlayerID": 19801,
            "Name": "Josh Allen",
            "Position": "QB",
            "Team": "BUF",
            "Number": 17,
            "Height": "6'5\"",
            "Weight": 237,
            "College": null,
            "Experience": 7
        });

        let record: PlayerRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.name.unwrap().to_string(), "Josh Allen");
        assert_eq!(record.number.unwrap().to_string(), "17");
        assert_eq!(record.height.unwrap().to_string(), "6'5\"");
        assert!(record.college.is_none());
        assert!(record.status.is_none());
    }

    #[test]
    fn test_empty_object_decodes_to_default() {
        let record: PlayerRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, PlayerRecord::default());
    }

    #[test]
    fn test_handler_response_serializes_status_code_key() {
        let response = HandlerResponse::error("Error publishing chunk 2");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"statusCode": 500, "body": "Error publishing chunk 2"})
        );
    }

    #[test]
    fn test_payload_source_from_str() {
        assert_eq!("roster".parse::<PayloadSource>(), Ok(PayloadSource::Roster));
        assert_eq!(
            " Placeholder ".parse::<PayloadSource>(),
            Ok(PayloadSource::Placeholder)
        );
        assert!("everything".parse::<PayloadSource>().is_err());
    }
}
