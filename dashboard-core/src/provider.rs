use async_trait::async_trait;
use std::fmt::Debug;

use crate::{WeatherReport, WeatherRequest};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Why a lookup failed. The user only ever sees one message for all of
/// these; the variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_status_and_body() {
        let err = LookupError::Status { status: 404, body: "city not found".into() };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("city not found"));
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let err: LookupError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, LookupError::Parse(_)));
    }
}
