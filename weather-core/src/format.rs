use crate::icons::IconPair;

/// Font family the glyph codes belong to.
pub const ICON_FONT: &str = "Weather Icons";

/// Render the status line, e.g.
/// `<span font='Weather Icons'>&#xf019; 10&#xf03c;</span>`.
pub fn render(icons: &IconPair, temperature: f64, precision: usize) -> String {
    format!(
        "<span font='{ICON_FONT}'>&#x{}; {temperature:.precision$}&#x{};</span>",
        icons.condition, icons.unit,
    )
}
