use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{error::FetchError, model::WeatherReading};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeather "current weather by city name" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
}

impl Default for OpenWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self, api_key))]
    async fn fetch(&self, city_name: &str, api_key: &str) -> Result<WeatherReading, FetchError> {
        let city_name = city_name.trim();
        if city_name.is_empty() {
            return Err(FetchError::Other("missing input".to_string()));
        }
        if api_key.trim().is_empty() {
            return Err(FetchError::Other("missing API key".to_string()));
        }

        let url = self.endpoint();
        debug!(url = %url, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city_name), ("appid", api_key)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather request failed");
                FetchError::from_transport(&e)
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "OpenWeather returned an error status");
            return Err(FetchError::from_status(status));
        }

        let body = res.text().await.map_err(|e| FetchError::from_transport(&e))?;

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Parse a 2xx response body into a reading.
///
/// A body-level `cod` other than 200 is classified like an HTTP status.
fn parse_current(body: &str) -> Result<WeatherReading, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "OpenWeather body is not JSON");
        FetchError::malformed()
    })?;

    if let Some(cod) = value.get("cod") {
        check_cod(cod)?;
    }

    let parsed: OwCurrentResponse = serde_json::from_value(value).map_err(|e| {
        debug!(error = %e, "OpenWeather body does not match the current weather schema");
        FetchError::malformed()
    })?;

    let weather = parsed.weather.into_iter().next().ok_or_else(FetchError::malformed)?;

    if parsed.main.humidity > 100 || !parsed.wind.speed.is_finite() || parsed.wind.speed < 0.0 {
        return Err(FetchError::malformed());
    }

    Ok(WeatherReading::new(
        parsed.name,
        parsed.sys.country,
        parsed.main.temp,
        parsed.main.feels_like,
        weather.id,
        weather.description,
        parsed.main.humidity,
        parsed.wind.speed,
    ))
}

fn check_cod(cod: &Value) -> Result<(), FetchError> {
    let code = match cod {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };

    match code {
        Some(200) => Ok(()),
        Some(code) => {
            warn!(cod = code, "OpenWeather body reported a non-200 code");
            Err(StatusCode::from_u16(code)
                .map(FetchError::from_status)
                .unwrap_or_else(|_| FetchError::malformed()))
        }
        None => Err(FetchError::malformed()),
    }
}
