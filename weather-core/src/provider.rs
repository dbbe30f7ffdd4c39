use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::FetchError, model::WeatherReading};

pub mod openweather;

/// A source of current weather conditions.
///
/// Each call is a single attempt: implementations neither retry nor cache.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city_name: &str, api_key: &str) -> Result<WeatherReading, FetchError>;
}
