use ug_core::Identity;

use serde::Deserialize;

/// Identity object as returned inside a GoTrue user
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityResponse {
    pub identity_id: String,
    #[serde(default)]
    pub user_id: String,
    pub provider: String,
}

impl From<IdentityResponse> for Identity {
    fn from(response: IdentityResponse) -> Self {
        Identity::new(response.identity_id, response.user_id, response.provider)
    }
}
