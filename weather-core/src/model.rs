use chrono::{DateTime, Utc};

/// Where the weather is reported for.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable label, e.g. "Lyon, Auvergne-Rhône-Alpes, France".
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub language: String,
    /// `None` means "now".
    pub when: Option<DateTime<Utc>>,
    /// Also fetch the hourly/daily summaries.
    pub summaries: bool,
}

impl ForecastRequest {
    pub fn new(location: &Location, language: &str) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            language: language.to_owned(),
            when: None,
            summaries: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Always degrees Fahrenheit, whatever unit the user picked.
    pub temperature_f: f64,
    /// Condition code, e.g. "partly-cloudy-night". May be empty or unknown.
    pub icon: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub currently: CurrentConditions,
    pub hourly_summary: Option<String>,
    pub daily_summary: Option<String>,
}
