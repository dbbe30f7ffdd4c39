//! Core library for the `weather` app.
//!
//! This crate defines:
//! - The OpenWeather client and its error classification
//! - Display state: last reading, selected unit, rendered view
//! - Configuration & credentials handling
//! - The session that ties a lookup to the display state
//!
//! It is used by `weather-cli`, but any render surface can drive a [`WeatherSession`].

pub mod config;
pub mod credential;
pub mod display;
pub mod error;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use credential::{CredentialProvider, StaticCredential};
pub use display::{DisplayState, condition_emoji};
pub use error::{FetchError, LookupError};
pub use model::{DisplayUnit, RenderedView, WeatherReading};
pub use provider::{WeatherProvider, openweather::OpenWeatherClient};
pub use session::WeatherSession;
