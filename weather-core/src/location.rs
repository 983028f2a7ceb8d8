use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    config::Endpoints,
    location::{geocode::AddressGeocoder, ip::IpLocator},
    model::Location,
};

pub mod geocode;
pub mod ip;

#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn resolve(&self) -> anyhow::Result<Location>;
}

/// Geocode `address` when given, otherwise locate by IP.
pub fn locator_for(
    address: Option<&str>,
    endpoints: &Endpoints,
    http: Client,
) -> Box<dyn LocationProvider> {
    match address {
        Some(address) => {
            Box::new(AddressGeocoder::new(address.to_owned(), endpoints.geocode.clone(), http))
        }
        None => Box::new(IpLocator::new(endpoints.ip_lookup.clone(), http)),
    }
}
