use crate::IdentityResponse;

use ug_core::{Identity, User};

use serde::Deserialize;

/// Subset of the GoTrue user object the guard needs
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Absent or null when the user has no identities
    #[serde(default)]
    pub identities: Option<Vec<IdentityResponse>>,
}

impl UserResponse {
    /// Identities of this user; older GoTrue versions omit `user_id` on
    /// each identity, so it is filled from the owning user
    pub fn into_identities(self) -> Vec<Identity> {
        let user_id = self.id;
        self.identities
            .unwrap_or_default()
            .into_iter()
            .map(|response| {
                let mut identity = Identity::from(response);
                if identity.user_id.is_empty() {
                    identity.user_id = user_id.clone();
                }
                identity
            })
            .collect()
    }
}

impl From<UserResponse> for User {
    fn from(response: UserResponse) -> Self {
        User {
            id: response.id,
            email: response.email,
        }
    }
}
