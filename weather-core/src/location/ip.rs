use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{http::fetch_text, model::Location};

use super::LocationProvider;

/// Locates the machine from its public IP (ip-api.com response format).
#[derive(Debug, Clone)]
pub struct IpLocator {
    url: String,
    http: Client,
}

impl IpLocator {
    pub fn new(url: String, http: Client) -> Self {
        Self { url, http }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    city: String,
    #[serde(default)]
    region_name: String,
    #[serde(default)]
    country: String,
}

fn parse_response(body: &str) -> Result<Location> {
    let parsed: IpApiResponse =
        serde_json::from_str(body).context("Failed to parse IP geolocation JSON")?;

    if parsed.status != "success" {
        return Err(anyhow!(
            "IP geolocation failed: {}",
            parsed.message.as_deref().unwrap_or("no reason given")
        ));
    }

    let (Some(latitude), Some(longitude)) = (parsed.lat, parsed.lon) else {
        return Err(anyhow!("IP geolocation response has no coordinates"));
    };

    let mut label = [parsed.city, parsed.region_name, parsed.country]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if label.is_empty() {
        label = format!("{latitude}, {longitude}");
    }

    Ok(Location { latitude, longitude, label })
}

#[async_trait]
impl LocationProvider for IpLocator {
    async fn resolve(&self) -> Result<Location> {
        log::debug!("Locating by IP via {}", self.url);
        let body = fetch_text(self.http.get(&self.url), "IP geolocation").await?;
        parse_response(&body)
    }
}
