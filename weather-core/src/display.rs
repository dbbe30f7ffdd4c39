//! Display state: the last reading plus the selected unit, rendered on demand.

use crate::{
    error::LookupError,
    model::{DisplayUnit, RenderedView, WeatherReading},
};

/// Icon for a provider condition code. Total: unknown codes map to "".
pub fn condition_emoji(condition_id: i64) -> &'static str {
    match condition_id {
        200..=232 => "⛈",
        300..=321 => "🌦",
        500..=531 => "🌧",
        600..=622 => "❄",
        701..=741 => "🌫",
        762 => "🌋",
        771 => "💨",
        781 => "🌪",
        800 => "☀",
        801..=804 => "☁",
        _ => "",
    }
}

/// Render a Kelvin value in `unit`, rounded to a whole degree, e.g. "32°F".
pub fn format_temperature(kelvin: f64, unit: DisplayUnit) -> String {
    let degrees = unit.convert_kelvin(kelvin).round() as i64;
    format!("{degrees}{}", unit.symbol())
}

/// Render a m/s wind speed as km/h with one decimal, e.g. "36.0 km/h".
pub fn format_wind(speed_mps: f64) -> String {
    format!("{:.1} km/h", speed_mps * 3.6)
}

#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    reading: Option<WeatherReading>,
    unit: DisplayUnit,
    error: Option<String>,
}

impl DisplayState {
    pub fn new(unit: DisplayUnit) -> Self {
        Self { reading: None, unit, error: None }
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the stored reading wholesale and forget any previous error.
    pub fn set_reading(&mut self, reading: WeatherReading) {
        self.reading = Some(reading);
        self.error = None;
    }

    /// Drop the stored reading so no stale data stays on screen.
    pub fn show_error(&mut self, err: &LookupError) {
        self.reading = None;
        self.error = Some(err.user_message());
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    pub fn render(&self) -> RenderedView {
        let Some(reading) = &self.reading else {
            return RenderedView { error: self.error.clone(), ..RenderedView::default() };
        };

        RenderedView {
            city_line: format!("{}, {}", reading.city_name(), reading.country_code()),
            temperature_line: format_temperature(reading.temperature_absolute(), self.unit),
            feels_like_line: format!(
                "Feels like {}",
                format_temperature(reading.feels_like_absolute(), self.unit)
            ),
            emoji: condition_emoji(reading.condition_id()).to_string(),
            description: reading.description().to_string(),
            humidity_line: format!("💧 Humidity: {}%", reading.humidity_percent()),
            wind_line: format!("💨 Wind: {}", format_wind(reading.wind_speed_mps())),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    fn reading(kelvin: f64, wind: f64) -> WeatherReading {
        WeatherReading::new("London", "GB", kelvin, kelvin - 1.5, 500, "light rain", 81, wind)
    }

    #[test]
    fn emoji_ranges() {
        let cases: &[(std::ops::RangeInclusive<i64>, &str)] = &[
            (200..=232, "⛈"),
            (300..=321, "🌦"),
            (500..=531, "🌧"),
            (600..=622, "❄"),
            (701..=741, "🌫"),
            (801..=804, "☁"),
        ];
        for (range, icon) in cases {
            for id in range.clone() {
                assert_eq!(condition_emoji(id), *icon, "id {id}");
            }
        }

        assert_eq!(condition_emoji(762), "🌋");
        assert_eq!(condition_emoji(771), "💨");
        assert_eq!(condition_emoji(781), "🌪");
        assert_eq!(condition_emoji(800), "☀");
    }

    #[test]
    fn emoji_outside_known_codes_is_empty() {
        for id in [-1, 0, 199, 233, 299, 322, 499, 532, 599, 623, 700, 742, 761, 770, 799, 805, 1000]
        {
            assert_eq!(condition_emoji(id), "", "id {id}");
        }
    }

    #[test]
    fn freezing_point_renders_in_both_units() {
        assert_eq!(format_temperature(273.15, DisplayUnit::Fahrenheit), "32°F");
        assert_eq!(format_temperature(273.15, DisplayUnit::Celsius), "0°C");
    }

    #[test]
    fn small_negative_rounds_without_sign() {
        assert_eq!(format_temperature(273.0, DisplayUnit::Celsius), "0°C");
        assert_eq!(format_temperature(263.15, DisplayUnit::Celsius), "-10°C");
    }

    #[test]
    fn wind_is_shown_in_kmh() {
        let mut state = DisplayState::default();
        state.set_reading(reading(273.15, 10.0));

        let view = state.render();
        assert!(view.wind_line.contains("36.0 km/h"), "{}", view.wind_line);
    }

    #[test]
    fn render_full_view() {
        let mut state = DisplayState::default();
        state.set_reading(reading(273.15, 4.1));

        let view = state.render();
        assert_eq!(view.city_line, "London, GB");
        assert_eq!(view.temperature_line, "32°F");
        assert_eq!(view.feels_like_line, "Feels like 29°F");
        assert_eq!(view.emoji, "🌧");
        assert_eq!(view.description, "light rain");
        assert_eq!(view.humidity_line, "💧 Humidity: 81%");
        assert_eq!(view.wind_line, "💨 Wind: 14.8 km/h");
        assert_eq!(view.error, None);
    }

    #[test]
    fn empty_state_renders_blank() {
        let view = DisplayState::default().render();
        assert!(view.is_blank());
        assert_eq!(view.error, None);
    }

    #[test]
    fn toggle_twice_restores_unit_and_text() {
        let mut state = DisplayState::default();
        state.set_reading(reading(295.37, 3.0));
        let before = state.render();

        state.toggle_unit();
        assert_eq!(state.unit(), DisplayUnit::Celsius);
        assert_ne!(state.render().temperature_line, before.temperature_line);

        state.toggle_unit();
        assert_eq!(state.unit(), DisplayUnit::Fahrenheit);
        assert_eq!(state.render(), before);
    }

    #[test]
    fn set_unit_rerenders_stored_reading() {
        let mut state = DisplayState::default();
        state.set_reading(reading(280.0, 0.0));
        state.set_unit(DisplayUnit::Celsius);
        assert_eq!(state.render().feels_like_line, "Feels like 5°C");
    }

    #[test]
    fn toggle_keeps_reading() {
        let mut state = DisplayState::default();
        let r = reading(280.0, 1.0);
        state.set_reading(r.clone());
        state.toggle_unit();
        assert_eq!(state.reading(), Some(&r));
    }

    #[test]
    fn error_clears_weather_fields() {
        let mut state = DisplayState::default();
        state.set_reading(reading(280.0, 1.0));

        state.show_error(&LookupError::Fetch(FetchError::Unauthorized));

        let view = state.render();
        assert!(view.is_blank());
        assert_eq!(view.error.as_deref(), Some("Unauthorized:\nInvalid API key"));
        assert!(state.reading().is_none());
    }

    #[test]
    fn new_reading_replaces_error() {
        let mut state = DisplayState::new(DisplayUnit::Celsius);
        state.show_error(&LookupError::MissingInput);
        state.set_reading(reading(273.15, 0.0));

        let view = state.render();
        assert_eq!(view.error, None);
        assert_eq!(view.temperature_line, "0°C");
        assert_eq!(state.error(), None);
    }
}
