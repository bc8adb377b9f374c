use axum::{http::StatusCode, Json};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use super::build_err_resp;
use crate::routes::ErrorResponseBody;

/// Integer row id that clients send either as a JSON number or as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i32);

#[derive(Debug, PartialEq, Eq)]
pub struct ParseRecordIdError(String);

impl fmt::Display for ParseRecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record id: {:?}", self.0)
    }
}

impl std::error::Error for ParseRecordIdError {}

impl FromStr for RecordId {
    type Err = ParseRecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(RecordId)
            .map_err(|_| ParseRecordIdError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => i32::try_from(n)
                .map(RecordId)
                .map_err(|_| de::Error::custom(ParseRecordIdError(n.to_string()))),
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

impl From<RecordId> for i32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Parses an id taken from the path or a form field.
pub fn parse_id(raw: &str) -> Result<i32, (StatusCode, Json<ErrorResponseBody>)> {
    raw.parse::<RecordId>()
        .map(i32::from)
        .map_err(|e| build_err_resp("Rejected record id", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        id: RecordId,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let body: Body = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(body.id, RecordId(42));

        let body: Body = serde_json::from_str(r#"{"id": " 7"}"#).unwrap();
        assert_eq!(body.id, RecordId(7));
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Body>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"id": 99999999999}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"id": null}"#).is_err());
        assert!("../1".parse::<RecordId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&RecordId(5)).unwrap(), "5");
    }
}
