use anyhow::Result;

use crate::{
    format,
    forecast::ForecastClient,
    icons,
    location::LocationProvider,
    model::ForecastRequest,
    notify::{Notification, Notifier},
    options::Options,
    units,
};

/// Collaborators used by [`run`].
#[derive(Debug)]
pub struct Services<'a> {
    pub locator: &'a dyn LocationProvider,
    pub forecast: &'a dyn ForecastClient,
    pub notifier: &'a dyn Notifier,
}

/// Produce the status line for one invocation.
///
/// When `clicked`, the forecast also carries the hourly/daily summaries and a
/// notification is sent. A failed notification is logged, not returned.
pub async fn run(options: &Options, services: &Services<'_>, clicked: bool) -> Result<String> {
    let location = services.locator.resolve().await?;
    log::info!("Location: {} ({}, {})", location.label, location.latitude, location.longitude);

    let request = ForecastRequest {
        when: options.when,
        summaries: clicked,
        ..ForecastRequest::new(&location, &options.language)
    };
    let forecast = services.forecast.forecast(&request).await?;

    let temperature =
        units::convert(forecast.currently.temperature_f, options.unit, options.precision);
    let glyphs = icons::resolve(&forecast.currently.icon, options.unit);
    log::debug!(
        "{} {}F -> {} {}",
        forecast.currently.icon,
        forecast.currently.temperature_f,
        temperature,
        options.unit
    );

    let line = format::render(&glyphs, temperature, options.precision);

    if clicked {
        let notification = Notification::from_forecast(&location.label, &forecast);
        if let Err(err) = services.notifier.notify(&notification).await {
            log::warn!("{err:#}");
        }
    }

    Ok(line)
}
