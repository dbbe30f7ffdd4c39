//! The controlling task: one display state, one provider, one credential source.
//!
//! `lookup` takes `&mut self`, so a second fetch cannot start while one is
//! still being awaited.

use tracing::{info, warn};

use crate::{
    credential::CredentialProvider,
    display::DisplayState,
    error::LookupError,
    model::{DisplayUnit, RenderedView},
    provider::WeatherProvider,
};

#[derive(Debug)]
pub struct WeatherSession<P, C> {
    provider: P,
    credentials: C,
    state: DisplayState,
}

impl<P, C> WeatherSession<P, C>
where
    P: WeatherProvider,
    C: CredentialProvider,
{
    pub fn new(provider: P, credentials: C, unit: DisplayUnit) -> Self {
        Self { provider, credentials, state: DisplayState::new(unit) }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn view(&self) -> RenderedView {
        self.state.render()
    }

    pub fn toggle_unit(&mut self) -> RenderedView {
        self.state.toggle_unit();
        self.state.render()
    }

    /// Look up `city` and update the display state with the outcome.
    ///
    /// Blank input or a missing key are reported without touching the network.
    pub async fn lookup(&mut self, city: &str) -> Result<RenderedView, LookupError> {
        match self.try_lookup(city).await {
            Ok(()) => Ok(self.state.render()),
            Err(err) => {
                warn!(error = %err, "Lookup failed");
                self.state.show_error(&err);
                Err(err)
            }
        }
    }

    async fn try_lookup(&mut self, city: &str) -> Result<(), LookupError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::MissingInput);
        }

        let api_key = self.credentials.api_key().ok_or(LookupError::MissingCredential)?;

        let reading = self.provider.fetch(city, &api_key).await?;
        info!(city = reading.city_name(), country = reading.country_code(), "Weather updated");

        self.state.set_reading(reading);
        Ok(())
    }
}
