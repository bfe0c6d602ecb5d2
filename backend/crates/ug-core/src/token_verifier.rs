use crate::{Credential, StoreError, User};

use async_trait::async_trait;

/// Resolves a bearer credential to the user it belongs to
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// `Ok(None)` means the verifier answered but knows no such user.
    async fn resolve(&self, credential: &Credential) -> Result<Option<User>, StoreError>;
}
