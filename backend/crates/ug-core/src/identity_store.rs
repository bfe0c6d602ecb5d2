use crate::{Credential, Identity, StoreError};

use async_trait::async_trait;

/// External store owning identity records.
///
/// The guard reads through `list_identities` and issues at most one
/// `delete_identity` per request.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn list_identities(&self, user_id: &str) -> Result<Vec<Identity>, StoreError>;

    /// Delete one identity. The caller's credential is forwarded because some
    /// stores scope identity deletion to the owning user's session.
    async fn delete_identity(
        &self,
        credential: &Credential,
        identity_id: &str,
    ) -> Result<(), StoreError>;
}
