use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{http::fetch_text, model::Location};

use super::LocationProvider;

/// Geocodes a free-form address against a Nominatim-style search endpoint.
#[derive(Debug, Clone)]
pub struct AddressGeocoder {
    address: String,
    url: String,
    http: Client,
}

impl AddressGeocoder {
    pub fn new(address: String, url: String, http: Client) -> Self {
        Self { address, url, http }
    }
}

// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

fn parse_response(address: &str, body: &str) -> Result<Location> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).context("Failed to parse geocoding JSON")?;

    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No geocoding results for address '{address}'"))?;

    let latitude: f64 = place
        .lat
        .parse()
        .with_context(|| format!("Invalid latitude '{}' in geocoding result", place.lat))?;
    let longitude: f64 = place
        .lon
        .parse()
        .with_context(|| format!("Invalid longitude '{}' in geocoding result", place.lon))?;

    Ok(Location { latitude, longitude, label: place.display_name })
}

#[async_trait]
impl LocationProvider for AddressGeocoder {
    async fn resolve(&self) -> Result<Location> {
        log::debug!("Geocoding '{}' via {}", self.address, self.url);

        let request = self.http.get(&self.url).query(&[
            ("q", self.address.as_str()),
            ("format", "jsonv2"),
            ("limit", "1"),
        ]);
        let body = fetch_text(request, "geocoding").await?;

        parse_response(&self.address, &body)
    }
}
