use crate::GOOGLE_PROVIDER;

/// A link between a user and one authentication provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Unique identifier of this identity record (what gets deleted)
    pub identity_id: String,
    pub user_id: String,
    /// Provider name, e.g. "google" or "email"
    pub provider: String,
}

impl Identity {
    pub fn new(
        identity_id: impl Into<String>,
        user_id: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            identity_id: identity_id.into(),
            user_id: user_id.into(),
            provider: provider.into(),
        }
    }

    pub fn is_google(&self) -> bool {
        self.provider == GOOGLE_PROVIDER
    }
}
