use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    http::fetch_text,
    model::{CurrentConditions, Forecast, ForecastRequest},
};

use super::ForecastClient;

/// Client for the Dark Sky forecast API and its drop-in replacements
/// (Pirate Weather, ...).
///
/// Always requests `units=us`, which is what makes the returned temperature
/// Fahrenheit.
#[derive(Debug, Clone)]
pub struct DarkSkyClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl DarkSkyClient {
    pub fn new(api_key: String, base_url: String, http: Client) -> Self {
        Self { api_key, base_url, http }
    }

    /// `{base}/{key}/{lat},{lon}[,{time}]`
    fn url(&self, request: &ForecastRequest) -> String {
        let base = self.base_url.trim_end_matches('/');
        let mut url =
            format!("{base}/{}/{},{}", self.api_key, request.latitude, request.longitude);
        if let Some(when) = request.when {
            url.push_str(&format!(",{}", when.timestamp()));
        }
        url
    }

    fn query(request: &ForecastRequest) -> Vec<(&'static str, String)> {
        let exclude = if request.summaries {
            "minutely,alerts,flags"
        } else {
            "minutely,hourly,daily,alerts,flags"
        };

        vec![
            ("units", "us".to_string()),
            ("lang", request.language.clone()),
            ("exclude", exclude.to_string()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct DsCurrently {
    temperature: f64,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct DsBlock {
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DsResponse {
    currently: DsCurrently,
    hourly: Option<DsBlock>,
    daily: Option<DsBlock>,
}

fn parse_response(body: &str) -> Result<Forecast> {
    let parsed: DsResponse =
        serde_json::from_str(body).context("Failed to parse forecast JSON")?;

    Ok(Forecast {
        currently: CurrentConditions {
            temperature_f: parsed.currently.temperature,
            icon: parsed.currently.icon,
            summary: parsed.currently.summary,
        },
        hourly_summary: parsed.hourly.and_then(|b| b.summary),
        daily_summary: parsed.daily.and_then(|b| b.summary),
    })
}

#[async_trait]
impl ForecastClient for DarkSkyClient {
    async fn forecast(&self, request: &ForecastRequest) -> Result<Forecast> {
        log::debug!(
            "Requesting forecast for {},{} (time: {:?}, summaries: {})",
            request.latitude,
            request.longitude,
            request.when,
            request.summaries,
        );

        let http_request = self.http.get(self.url(request)).query(&Self::query(request));
        let body = fetch_text(http_request, "forecast API").await?;

        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn client() -> DarkSkyClient {
        DarkSkyClient::new("KEY".into(), "https://api.example.net/forecast/".into(), Client::new())
    }

    fn request() -> ForecastRequest {
        ForecastRequest {
            latitude: 59.91,
            longitude: -10.5,
            language: "en".into(),
            when: None,
            summaries: false,
        }
    }

    #[test]
    fn url_for_current_conditions() {
        assert_eq!(client().url(&request()), "https://api.example.net/forecast/KEY/59.91,-10.5");
    }

    #[test]
    fn url_for_point_in_time() {
        let req = ForecastRequest {
            when: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..request()
        };
        assert_eq!(
            client().url(&req),
            "https://api.example.net/forecast/KEY/59.91,-10.5,1709251200"
        );
    }

    #[test]
    fn query_always_asks_for_us_units() {
        let query = DarkSkyClient::query(&request());
        assert!(query.contains(&("units", "us".to_string())));
        assert!(query.contains(&("lang", "en".to_string())));
    }

    #[test]
    fn summaries_are_excluded_unless_requested() {
        let without = DarkSkyClient::query(&request());
        assert!(without.contains(&("exclude", "minutely,hourly,daily,alerts,flags".to_string())));

        let with = DarkSkyClient::query(&ForecastRequest { summaries: true, ..request() });
        assert!(with.contains(&("exclude", "minutely,alerts,flags".to_string())));
    }

    #[test]
    fn parses_full_response() {
        let body = r#"{
            "latitude": 59.91,
            "longitude": 10.75,
            "timezone": "Europe/Oslo",
            "currently": {
                "time": 1709251200,
                "summary": "Light Rain",
                "icon": "rain",
                "temperature": 38.4,
                "humidity": 0.91
            },
            "hourly": {
                "summary": "Rain until evening.",
                "icon": "rain",
                "data": []
            },
            "daily": {
                "summary": "Mixed precipitation throughout the week.",
                "data": []
            }
        }"#;

        let forecast = parse_response(body).expect("valid response");
        assert_eq!(forecast.currently.temperature_f, 38.4);
        assert_eq!(forecast.currently.icon, "rain");
        assert_eq!(forecast.currently.summary, "Light Rain");
        assert_eq!(forecast.hourly_summary.as_deref(), Some("Rain until evening."));
        assert_eq!(
            forecast.daily_summary.as_deref(),
            Some("Mixed precipitation throughout the week.")
        );
    }

    #[test]
    fn parses_current_only_response() {
        let body = r#"{"currently":{"temperature":71.2}}"#;

        let forecast = parse_response(body).expect("valid response");
        assert_eq!(forecast.currently.temperature_f, 71.2);
        assert_eq!(forecast.currently.icon, "");
        assert_eq!(forecast.hourly_summary, None);
        assert_eq!(forecast.daily_summary, None);
    }

    #[test]
    fn missing_temperature_is_an_error() {
        let err = parse_response(r#"{"currently":{"icon":"rain"}}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse forecast JSON"));
    }
}
