use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{
    config::Config,
    error::ConfigError,
    units::{MAX_PRECISION, Unit},
};

/// Raw command-line values, before validation.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub farenheit: bool,
    pub celsius: bool,
    pub api_key: Option<String>,
    pub address: Option<String>,
    pub precision: usize,
    pub language: Option<String>,
    pub time: Option<String>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub unit: Unit,
    pub api_key: String,
    pub address: Option<String>,
    pub precision: usize,
    pub language: String,
    pub when: Option<DateTime<Utc>>,
}

impl Options {
    /// Merge flags over the config file and validate the result.
    pub fn resolve(flags: Flags, config: &Config) -> Result<Self, ConfigError> {
        let unit = Unit::from_flags(flags.farenheit, flags.celsius)?;

        if flags.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(flags.precision));
        }

        let api_key = non_blank(flags.api_key)
            .or_else(|| non_blank(config.api_key.clone()))
            .ok_or(ConfigError::MissingApiKey)?;

        let address = non_blank(flags.address).or_else(|| non_blank(config.address.clone()));

        let language = non_blank(flags.language).unwrap_or_else(|| config.language().to_string());

        let when = flags.time.as_deref().map(parse_time).transpose()?;

        Ok(Self { unit, api_key, address, precision: flags.precision, language, when })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse a point in time. Values without an offset are taken as UTC.
pub fn parse_time(input: &str) -> Result<DateTime<Utc>, ConfigError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc());
        }
    }

    if let Some(ndt) =
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(ndt.and_utc());
    }

    Err(ConfigError::InvalidTime(input.to_string()))
}
