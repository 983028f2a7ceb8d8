//! Weather Icons glyph codes, see <https://erikflowers.github.io/weather-icons/>.

use crate::units::Unit;

pub const FAHRENHEIT_GLYPH: &str = "f045";
pub const CELSIUS_GLYPH: &str = "f03c";

/// Glyph for conditions missing from [`CONDITIONS`] ("N/A").
pub const UNKNOWN_GLYPH: &str = "f07b";
/// Icon-theme name for conditions missing from [`CONDITIONS`].
pub const UNKNOWN_DESKTOP_ICON: &str = "weather-severe-alert";

/// One row of the condition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    /// Condition code as reported by the forecast API.
    pub code: &'static str,
    /// Weather Icons glyph, 4 hex digits.
    pub glyph: &'static str,
    /// freedesktop icon-theme name, used for notifications.
    pub desktop_icon: &'static str,
}

const fn row(code: &'static str, glyph: &'static str, desktop_icon: &'static str) -> Condition {
    Condition { code, glyph, desktop_icon }
}

pub static CONDITIONS: &[Condition] = &[
    row("clear-day", "f00d", "weather-clear"),
    row("clear-night", "f02e", "weather-clear-night"),
    row("rain", "f019", "weather-showers"),
    row("snow", "f01b", "weather-snow"),
    row("sleet", "f0b5", "weather-snow"),
    row("wind", "f050", "weather-windy"),
    row("fog", "f014", "weather-fog"),
    row("cloudy", "f013", "weather-overcast"),
    row("partly-cloudy-day", "f002", "weather-few-clouds"),
    row("partly-cloudy-night", "f083", "weather-few-clouds-night"),
    row("thunderstorm", "f016", "weather-storm"),
    row("hail", "f015", "weather-showers"),
    row("tornado", "f056", "weather-severe-alert"),
];

/// Unit and condition glyphs for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPair {
    pub unit: &'static str,
    pub condition: &'static str,
}

pub fn lookup(code: &str) -> Option<&'static Condition> {
    CONDITIONS.iter().find(|c| c.code == code)
}

pub fn condition_glyph(code: &str) -> &'static str {
    lookup(code).map_or(UNKNOWN_GLYPH, |c| c.glyph)
}

pub fn desktop_icon(code: &str) -> &'static str {
    lookup(code).map_or(UNKNOWN_DESKTOP_ICON, |c| c.desktop_icon)
}

pub fn unit_glyph(unit: Unit) -> &'static str {
    match unit {
        Unit::Fahrenheit => FAHRENHEIT_GLYPH,
        Unit::Celsius => CELSIUS_GLYPH,
    }
}

pub fn resolve(code: &str, unit: Unit) -> IconPair {
    IconPair { unit: unit_glyph(unit), condition: condition_glyph(code) }
}
