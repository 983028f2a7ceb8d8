//! Core library for the `i3blocks-weather` block.
//!
//! This crate defines:
//! - Option validation and the optional config file
//! - Unit conversion, the Weather Icons glyph table and the markup formatter
//! - Location, forecast and notification collaborators behind small traits
//! - The [`run`] pipeline tying them together
//!
//! It is used by the `i3blocks-weather` binary, but `run` can be driven with
//! any implementation of the collaborator traits.

pub mod config;
pub mod error;
pub mod forecast;
pub mod format;
pub mod http;
pub mod icons;
pub mod location;
pub mod model;
pub mod notify;
pub mod options;
pub mod run;
pub mod units;

pub use config::{Config, Endpoints};
pub use error::ConfigError;
pub use forecast::{DarkSkyClient, ForecastClient};
pub use icons::IconPair;
pub use location::{LocationProvider, locator_for};
pub use model::{CurrentConditions, Forecast, ForecastRequest, Location};
pub use notify::{DesktopNotifier, Notification, Notifier};
pub use options::{Flags, Options};
pub use run::{Services, run};
pub use units::Unit;
