use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::{Forecast, ForecastRequest};

pub mod darksky;

pub use darksky::DarkSkyClient;

/// Source of forecast data.
///
/// Implementations must report [`crate::model::CurrentConditions::temperature_f`]
/// in degrees Fahrenheit, independent of the unit the user asked for.
#[async_trait]
pub trait ForecastClient: Send + Sync + Debug {
    async fn forecast(&self, request: &ForecastRequest) -> anyhow::Result<Forecast>;
}
