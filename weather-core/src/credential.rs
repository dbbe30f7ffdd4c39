/// Supplies the API key for a lookup.
///
/// Prompting and persistence belong to the implementation; the core only
/// asks for a string and treats `None` as a missing credential.
pub trait CredentialProvider {
    fn api_key(&self) -> Option<String>;
}

/// A key injected up front, e.g. from the environment or a test.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(Some(api_key.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.as_deref().map(str::trim).filter(|key| !key.is_empty()).map(str::to_owned)
    }
}
