//! Desktop notification shown when the block is clicked.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::{collections::HashMap, fmt::Debug};
use zbus::{Connection, zvariant::Value};

use crate::{icons, model::Forecast};

pub const APP_NAME: &str = "i3blocks-weather";

/// Environment variable i3blocks sets to the mouse button of a click.
pub const BLOCK_BUTTON: &str = "BLOCK_BUTTON";

// Milliseconds; -1 lets the server decide.
const EXPIRE_TIMEOUT: i32 = -1;

/// Whether the invocation came from a click on the block.
pub fn should_notify(block_button: Option<&str>) -> bool {
    block_button.is_some_and(|b| !b.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub summary: String,
    pub body: String,
    pub icon: String,
}

impl Notification {
    pub fn new(label: &str, hourly: Option<&str>, daily: Option<&str>, condition: &str) -> Self {
        let body = [hourly, daily]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            summary: format!("Weather in {label}"),
            body,
            icon: icons::desktop_icon(condition).to_string(),
        }
    }

    pub fn from_forecast(label: &str, forecast: &Forecast) -> Self {
        Self::new(
            label,
            forecast.hourly_summary.as_deref(),
            forecast.daily_summary.as_deref(),
            &forecast.currently.icon,
        )
    }
}

#[async_trait]
pub trait Notifier: Send + Sync + Debug {
    async fn notify(&self, notification: &Notification) -> Result<()>;
}

/// Sends through `org.freedesktop.Notifications` on the session bus.
#[derive(Debug, Clone, Default)]
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let connection =
            Connection::session().await.context("Failed to connect to the session bus")?;

        let actions: Vec<&str> = Vec::new();
        let hints: HashMap<&str, Value<'_>> = HashMap::new();

        connection
            .call_method(
                Some("org.freedesktop.Notifications"),
                "/org/freedesktop/Notifications",
                Some("org.freedesktop.Notifications"),
                "Notify",
                &(
                    APP_NAME,
                    0u32,
                    notification.icon.as_str(),
                    notification.summary.as_str(),
                    notification.body.as_str(),
                    actions,
                    hints,
                    EXPIRE_TIMEOUT,
                ),
            )
            .await
            .context("Failed to send desktop notification")?;

        log::debug!("Sent notification '{}'", notification.summary);
        Ok(())
    }
}
