use serde::{Deserialize, Serialize};

/// One successful snapshot of current conditions for a city.
///
/// Temperatures are kept on the absolute (Kelvin) scale and only converted
/// when rendered. Built once from a provider response and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    city_name: String,
    country_code: String,
    temperature_absolute: f64,
    feels_like_absolute: f64,
    condition_id: i64,
    description: String,
    humidity_percent: u8,
    wind_speed_mps: f64,
}

impl WeatherReading {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        city_name: impl Into<String>,
        country_code: impl Into<String>,
        temperature_absolute: f64,
        feels_like_absolute: f64,
        condition_id: i64,
        description: impl Into<String>,
        humidity_percent: u8,
        wind_speed_mps: f64,
    ) -> Self {
        Self {
            city_name: city_name.into(),
            country_code: country_code.into(),
            temperature_absolute,
            feels_like_absolute,
            condition_id,
            description: description.into(),
            humidity_percent,
            wind_speed_mps,
        }
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Temperature in Kelvin.
    pub fn temperature_absolute(&self) -> f64 {
        self.temperature_absolute
    }

    /// "Feels like" temperature in Kelvin.
    pub fn feels_like_absolute(&self) -> f64 {
        self.feels_like_absolute
    }

    /// Provider condition code, e.g. 500 for light rain.
    pub fn condition_id(&self) -> i64 {
        self.condition_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn humidity_percent(&self) -> u8 {
        self.humidity_percent
    }

    pub fn wind_speed_mps(&self) -> f64 {
        self.wind_speed_mps
    }
}

/// Unit used to display temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Fahrenheit => "fahrenheit",
            DisplayUnit::Celsius => "celsius",
        }
    }

    pub const fn all() -> &'static [DisplayUnit] {
        &[DisplayUnit::Fahrenheit, DisplayUnit::Celsius]
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayUnit::Fahrenheit => DisplayUnit::Celsius,
            DisplayUnit::Celsius => DisplayUnit::Fahrenheit,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Fahrenheit => "°F",
            DisplayUnit::Celsius => "°C",
        }
    }

    /// Label for the control that switches away from this unit.
    pub fn toggle_label(&self) -> String {
        format!("Switch to {}", self.toggled().symbol())
    }

    /// Convert a Kelvin value into this unit.
    pub fn convert_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            DisplayUnit::Fahrenheit => kelvin * 9.0 / 5.0 - 459.67,
            DisplayUnit::Celsius => kelvin - 273.15,
        }
    }
}

impl std::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DisplayUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(DisplayUnit::Fahrenheit),
            "celsius" | "c" => Ok(DisplayUnit::Celsius),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: fahrenheit, celsius."
            )),
        }
    }
}

impl std::str::FromStr for DisplayUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayUnit::try_from(s)
    }
}

/// Formatted, ready-to-paint view of the display state.
///
/// Weather fields are empty strings when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedView {
    pub city_line: String,
    pub temperature_line: String,
    pub feels_like_line: String,
    pub emoji: String,
    pub description: String,
    pub humidity_line: String,
    pub wind_line: String,
    /// Message for the last failed lookup, if it has not been superseded.
    pub error: Option<String>,
}

impl RenderedView {
    /// True when no weather field carries data.
    pub fn is_blank(&self) -> bool {
        self.city_line.is_empty()
            && self.temperature_line.is_empty()
            && self.feels_like_line.is_empty()
            && self.emoji.is_empty()
            && self.description.is_empty()
            && self.humidity_line.is_empty()
            && self.wind_line.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unit_defaults_to_fahrenheit() {
        assert_eq!(DisplayUnit::default(), DisplayUnit::Fahrenheit);
    }

    #[test]
    fn display_unit_as_str_roundtrip() {
        for unit in DisplayUnit::all() {
            let parsed = DisplayUnit::try_from(unit.as_str()).expect("roundtrip should succeed");
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn display_unit_accepts_short_forms() {
        assert_eq!("C".parse::<DisplayUnit>().unwrap(), DisplayUnit::Celsius);
        assert_eq!(" f ".parse::<DisplayUnit>().unwrap(), DisplayUnit::Fahrenheit);
    }

    #[test]
    fn unknown_unit_error() {
        let err = DisplayUnit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }

    #[test]
    fn toggle_label_names_the_other_unit() {
        assert_eq!(DisplayUnit::Fahrenheit.toggle_label(), "Switch to °C");
        assert_eq!(DisplayUnit::Celsius.toggle_label(), "Switch to °F");
    }

    #[test]
    fn kelvin_conversion() {
        assert!((DisplayUnit::Celsius.convert_kelvin(273.15)).abs() < 1e-9);
        assert!((DisplayUnit::Fahrenheit.convert_kelvin(273.15) - 32.0).abs() < 1e-9);
        assert!((DisplayUnit::Fahrenheit.convert_kelvin(373.15) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn display_unit_serializes_lowercase() {
        let json = serde_json::to_string(&DisplayUnit::Celsius).unwrap();
        assert_eq!(json, "\"celsius\"");
    }
}
