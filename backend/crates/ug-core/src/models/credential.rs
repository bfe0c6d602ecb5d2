use crate::{GuardError, GuardResult};

use std::fmt;

const BEARER_PREFIX: &str = "Bearer ";

/// Opaque bearer token presented by the caller.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse the value of an `Authorization` header.
    ///
    /// Requires the `Bearer ` scheme and a non-empty token.
    #[track_caller]
    pub fn from_authorization_header(header: Option<&str>) -> GuardResult<Self> {
        let value = header.ok_or_else(|| GuardError::unauthorized("missing Authorization header"))?;

        let token = value
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| GuardError::unauthorized("expected 'Bearer' authorization scheme"))?
            .trim();

        if token.is_empty() {
            return Err(GuardError::unauthorized("empty bearer token"));
        }

        Ok(Self(token.to_string()))
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}
